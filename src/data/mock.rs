//! Deterministic fallback listings
//!
//! Used whenever real listings cannot be obtained, so a page always has
//! something to render. Output depends only on the inputs.

use super::AdvisorRecord;

/// Generates the three placeholder advisors for `advisor_type` in `location`
pub fn generate_mock_advisors(advisor_type: &str, location: &str) -> Vec<AdvisorRecord> {
    let record = |id: &str, title: String, rating: f64, reviews: u64, address: String, phone: &str| {
        AdvisorRecord {
            id: id.to_string(),
            title,
            rating,
            reviews,
            address,
            phone: Some(phone.to_string()),
            category: advisor_type.to_string(),
            link: "#".to_string(),
        }
    };

    vec![
        record(
            "1",
            format!("{advisor_type} Specialists {location}"),
            4.8,
            127,
            format!("123 High Street, {location}"),
            "01234 567890",
        ),
        record(
            "2",
            format!("Professional {advisor_type} Services"),
            4.6,
            89,
            format!("456 Market Square, {location}"),
            "01234 567891",
        ),
        record(
            "3",
            format!("Expert {advisor_type} Consultancy"),
            4.9,
            156,
            format!("789 Business Park, {location}"),
            "01234 567892",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_has_fixed_ids_ratings_and_reviews() {
        let advisors = generate_mock_advisors("Financial Advisors", "Leeds");

        let ids: Vec<_> = advisors.iter().map(|a| a.id.as_str()).collect();
        let ratings: Vec<_> = advisors.iter().map(|a| a.rating).collect();
        let reviews: Vec<_> = advisors.iter().map(|a| a.reviews).collect();

        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(ratings, [4.8, 4.6, 4.9]);
        assert_eq!(reviews, [127, 89, 156]);
    }

    #[test]
    fn test_mock_interpolates_type_and_location() {
        let advisors = generate_mock_advisors("Mortgage Advisors", "Bristol");

        assert_eq!(
            advisors[0],
            AdvisorRecord {
                id: "1".to_string(),
                title: "Mortgage Advisors Specialists Bristol".to_string(),
                rating: 4.8,
                reviews: 127,
                address: "123 High Street, Bristol".to_string(),
                phone: Some("01234 567890".to_string()),
                category: "Mortgage Advisors".to_string(),
                link: "#".to_string(),
            }
        );
        assert_eq!(advisors[1].title, "Professional Mortgage Advisors Services");
        assert_eq!(advisors[1].address, "456 Market Square, Bristol");
        assert_eq!(advisors[2].title, "Expert Mortgage Advisors Consultancy");
        assert_eq!(advisors[2].phone.as_deref(), Some("01234 567892"));
    }

    #[test]
    fn test_mock_is_deterministic() {
        assert_eq!(
            generate_mock_advisors("Wealth Managers", "St Andrews & Fife"),
            generate_mock_advisors("Wealth Managers", "St Andrews & Fife")
        );
    }
}
