use crate::filter::criteria::FilterCriteria;
use crate::models::Property;

/// Decide whether a single property survives the current criteria and
/// free-text query. All active predicates must hold; unset criteria are
/// vacuously true.
pub fn matches(property: &Property, criteria: &FilterCriteria, query: &str) -> bool {
    if !query.is_empty() && !text_match(property, query) {
        return false;
    }

    if !criteria.city.is_empty() && property.location.city != criteria.city {
        return false;
    }

    if property.price > criteria.price_ceiling {
        return false;
    }

    if !criteria.property_type.is_empty() && property.property_type != criteria.property_type {
        return false;
    }

    // Inverted predicate: the ceiling is the longest minimum stay the
    // user tolerates, so raising it admits more listings.
    if criteria.min_duration_ceiling > 1 && property.min_stay > criteria.min_duration_ceiling {
        return false;
    }

    if !criteria.amenities.is_empty() {
        let all_present = criteria.amenities.iter().all(|wanted| {
            let wanted = wanted.to_lowercase();
            property
                .amenities
                .iter()
                .any(|have| have.to_lowercase().contains(&wanted))
        });
        if !all_present {
            return false;
        }
    }

    if !criteria.bedroom_counts.is_empty()
        && !criteria.bedroom_counts.contains(&property.bedrooms)
    {
        return false;
    }

    true
}

/// Narrow the full listing to the matching subset. A stable filter:
/// result order equals input order, no sort is applied.
pub fn evaluate(properties: &[Property], criteria: &FilterCriteria, query: &str) -> Vec<Property> {
    properties
        .iter()
        .filter(|property| matches(property, criteria, query))
        .cloned()
        .collect()
}

/// Case-insensitive substring search across title, description, city
/// and district.
fn text_match(property: &Property, query: &str) -> bool {
    let query = query.to_lowercase();
    property.title.to_lowercase().contains(&query)
        || property.description.to_lowercase().contains(&query)
        || property.location.city.to_lowercase().contains(&query)
        || property.location.district.to_lowercase().contains(&query)
}
