use crate::core::{City, CitySource, ConfigProvider, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use regex::Regex;

/// Pulls every `name: "...", region: "..."` pair out of the given text, one
/// entry per line. Lines without the pattern are skipped silently; entries
/// spread over multiple lines are not supported (the source format keeps
/// name and region together).
pub fn parse_cities(text: &str) -> Vec<City> {
    let pattern = Regex::new(r#"name:\s*"([^"]+)"\s*,\s*region:\s*"([^"]+)""#).unwrap();

    let mut cities = Vec::new();
    for line in text.lines() {
        if let Some(caps) = pattern.captures(line) {
            cities.push(City::new(&caps[1], &caps[2]));
        }
    }
    cities
}

/// City list backed by a file read through the storage seam.
pub struct FileCitySource<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FileCitySource<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait]
impl<S: Storage, C: ConfigProvider> CitySource for FileCitySource<S, C> {
    async fn load(&self) -> Result<Vec<City>> {
        tracing::debug!("Reading city list from: {}", self.config.cities_path());
        let bytes = self.storage.read_file(self.config.cities_path()).await?;
        let cities = parse_cities(&String::from_utf8_lossy(&bytes));

        if cities.is_empty() {
            tracing::warn!(
                "No city entries found in {}; every scramble will come up empty",
                self.config.cities_path()
            );
        }
        Ok(cities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_name_and_region() {
        let cities = parse_cities(r#"  { name: "Kupang", region: "Nusa Tenggara Timur" },"#);
        assert_eq!(cities, vec![City::new("KUPANG", "Nusa Tenggara Timur")]);
    }

    #[test]
    fn skips_lines_without_the_pattern() {
        let text = r#"export const cities: City[] = [
  // bagian barat
  { name: "Medan", region: "Sumatera Utara" },
];
"#;
        let cities = parse_cities(text);
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "MEDAN");
    }

    #[test]
    fn keeps_file_order_and_duplicates() {
        let text = r#"
  { name: "Ambon", region: "Maluku" },
  { name: "Ternate", region: "Maluku Utara" },
  { name: "Ambon", region: "Maluku" },
"#;
        let names: Vec<String> = parse_cities(text).into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["AMBON", "TERNATE", "AMBON"]);
    }

    #[test]
    fn name_must_precede_region_on_one_line() {
        let text = "{ name: \"Ambon\",\n  region: \"Maluku\" },";
        assert!(parse_cities(text).is_empty());
    }

    #[test]
    fn empty_input_yields_no_cities() {
        assert!(parse_cities("").is_empty());
    }
}
