use super::FilterCriteria;
use crate::normalize::coerce::leading_int;
use tracing::debug;
use url::form_urlencoded;

impl FilterCriteria {
    /// Read criteria from a listing-page query string such as
    /// `propertyType=House&minPrice=100&isForSale=true`.
    ///
    /// Blank and unparseable values are ignored. Room counts and areas read
    /// their leading integer (`3abc` → 3, `50.5` → 50); `isForSale` only
    /// accepts `true` or `false`. A leading `?` is allowed.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut criteria = FilterCriteria::default();

        for (key, raw) in form_urlencoded::parse(query.as_bytes()) {
            if key == "search" {
                if !raw.is_empty() {
                    criteria.search = Some(raw.into_owned());
                }
                continue;
            }
            let value = raw.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "propertyType" => criteria.property_type = Some(value.to_string()),
                "minPrice" => criteria.min_price = parse_float(value),
                "maxPrice" => criteria.max_price = parse_float(value),
                "bedrooms" => criteria.bedrooms = leading_int(value),
                "bathrooms" => criteria.bathrooms = leading_int(value),
                "minArea" => criteria.min_area = leading_int(value),
                "maxArea" => criteria.max_area = leading_int(value),
                "isForSale" => {
                    criteria.is_for_sale = match value {
                        "true" => Some(true),
                        "false" => Some(false),
                        _ => None,
                    }
                }
                other => debug!("Ignoring unknown filter parameter '{}'", other),
            }
        }

        criteria
    }

    /// Render the active options back into a query string
    pub fn to_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        let blank = |s: &Option<String>| s.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);

        if let Some(v) = blank(&self.property_type) {
            out.append_pair("propertyType", &v);
        }
        if let Some(v) = self.min_price {
            out.append_pair("minPrice", &v.to_string());
        }
        if let Some(v) = self.max_price {
            out.append_pair("maxPrice", &v.to_string());
        }
        if let Some(v) = self.bedrooms {
            out.append_pair("bedrooms", &v.to_string());
        }
        if let Some(v) = self.bathrooms {
            out.append_pair("bathrooms", &v.to_string());
        }
        if let Some(v) = self.min_area {
            out.append_pair("minArea", &v.to_string());
        }
        if let Some(v) = self.max_area {
            out.append_pair("maxArea", &v.to_string());
        }
        if let Some(v) = self.is_for_sale {
            out.append_pair("isForSale", if v { "true" } else { "false" });
        }
        if let Some(v) = self.search.as_deref().filter(|s| !s.is_empty()) {
            out.append_pair("search", v);
        }

        out.finish()
    }
}

fn parse_float(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
