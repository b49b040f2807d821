use crate::models::SearchCriteria;
use chrono::NaiveDate;
use url::form_urlencoded;

/// Route of the listings results page
pub const LISTINGS_PATH: &str = "/listings";

/// Query parameters understood by the listings results page
///
/// Keys appear in a fixed order (`q`, `city`, `state`, `price`, `duration`,
/// `amenities`) and absent fields are left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingsQuery {
    pairs: Vec<(&'static str, String)>,
}

impl ListingsQuery {
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        let mut pairs = Vec::new();

        if !criteria.free_text_query.is_empty() {
            pairs.push(("q", criteria.free_text_query.clone()));
        }
        if !criteria.city.is_empty() {
            pairs.push(("city", criteria.city.clone()));
        }
        if !criteria.state.is_empty() {
            pairs.push(("state", criteria.state.clone()));
        }
        if let Some(price) = price_range(&criteria.price_min, &criteria.price_max) {
            pairs.push(("price", price));
        }
        if let (Some(start), Some(end)) = (criteria.start_date, criteria.end_date) {
            pairs.push(("duration", format!("{}-{}", iso_date(start), iso_date(end))));
        }
        if !criteria.amenities.is_empty() {
            pairs.push(("amenities", criteria.amenities.join(",")));
        }

        Self { pairs }
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Form-urlencoded query string, without the leading `?`
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }

    /// Navigation target on the results page
    ///
    /// An empty search still yields `/listings?`.
    pub fn target(&self) -> String {
        format!("{}?{}", LISTINGS_PATH, self.to_query_string())
    }
}

impl From<&SearchCriteria> for ListingsQuery {
    fn from(criteria: &SearchCriteria) -> Self {
        Self::from_criteria(criteria)
    }
}

fn price_range(min: &str, max: &str) -> Option<String> {
    match (min.is_empty(), max.is_empty()) {
        (false, false) => Some(format!("{}-{}", min, max)),
        (false, true) => Some(format!("{}+", min)),
        (true, false) => Some(format!("0-{}", max)),
        (true, true) => None,
    }
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
