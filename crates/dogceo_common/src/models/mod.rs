//! Payload models carried by Dog CEO API responses.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

pub mod responses;

/// The discriminant of every response envelope.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The request completed and `message` carries the typed payload.
    Success,
    /// The request failed and `message` carries a human-readable description.
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown status `{0}`")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Status::Success),
            "error" => Ok(Status::Error),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Image URLs, in the order the API returned them.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
pub struct Images(pub Vec<String>);

impl Images {
    /// Extracts the breed directory from an image URL such as
    /// `https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg`.
    pub fn breed_of(url: &str) -> Option<&str> {
        let (_, rest) = url.split_once("/breeds/")?;
        let (breed, file) = rest.split_once('/')?;
        if breed.is_empty() || file.is_empty() {
            return None;
        }
        Some(breed)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Images {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for Images {
    fn from(urls: Vec<String>) -> Self {
        Images(urls)
    }
}

impl IntoIterator for Images {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// All breeds
// {"hound": ["afghan", "basset"], "pug": []}
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
pub struct BreedsList(pub HashMap<String, Vec<String>>);

impl BreedsList {
    /// Breed names, sorted. The API makes no ordering promise.
    pub fn breeds(&self) -> Vec<&str> {
        let mut breeds: Vec<&str> = self.0.keys().map(String::as_str).collect();
        breeds.sort_unstable();
        breeds
    }

    pub fn sub_breeds(&self, breed: &str) -> Option<&[String]> {
        self.0.get(breed).map(Vec::as_slice)
    }

    pub fn breed_count(&self) -> usize {
        self.0.len()
    }

    pub fn sub_breed_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Names in the `breed-subbreed` form used by image URL paths. A breed without sub-breeds
    /// yields its own name. The result is sorted.
    pub fn qualified_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .0
            .iter()
            .flat_map(|(breed, subs)| {
                if subs.is_empty() {
                    vec![breed.clone()]
                } else {
                    subs.iter().map(|sub| format!("{breed}-{sub}")).collect()
                }
            })
            .collect();
        names.sort_unstable();
        names
    }
}

impl From<HashMap<String, Vec<String>>> for BreedsList {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        BreedsList(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_statuses() {
        assert_eq!("success".parse::<Status>(), Ok(Status::Success));
        assert_eq!("error".parse::<Status>(), Ok(Status::Error));
        assert_eq!(Status::Success.to_string(), "success");
    }

    #[test]
    fn should_reject_unknown_status() {
        let err = "pending".parse::<Status>().unwrap_err();
        assert_eq!(err, ParseStatusError("pending".to_string()));

        // Literals are case sensitive
        assert!("Success".parse::<Status>().is_err());
        assert!(serde_json::from_str::<Status>(r#""SUCCESS""#).is_err());
    }

    #[test]
    fn should_extract_breed_from_image_url() {
        assert_eq!(
            Images::breed_of("https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg"),
            Some("hound-afghan")
        );
        assert_eq!(
            Images::breed_of("https://images.dog.ceo/breeds/pug/n02110958_15626.jpg"),
            Some("pug")
        );
        assert_eq!(Images::breed_of("https://a/1.jpg"), None);
        assert_eq!(Images::breed_of("https://images.dog.ceo/breeds//x.jpg"), None);
        assert_eq!(Images::breed_of("https://images.dog.ceo/breeds/pug"), None);
    }

    #[test]
    fn should_deserialize_images_as_plain_array() {
        let images: Images = serde_json::from_str(r#"["https://a/1.jpg","https://a/2.jpg"]"#)
            .unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0], "https://a/1.jpg");
        assert_eq!(images[1], "https://a/2.jpg");
    }

    #[test]
    fn should_summarize_breeds_list() {
        const BREEDS_JSON: &str =
            r#"{"hound":["afghan","basset","blood"],"pug":[],"bulldog":["boston","french"]}"#;

        let list: BreedsList = serde_json::from_str(BREEDS_JSON).unwrap();
        assert_eq!(list.breeds(), vec!["bulldog", "hound", "pug"]);
        assert_eq!(list.breed_count(), 3);
        assert_eq!(list.sub_breed_count(), 5);
        assert_eq!(
            list.sub_breeds("hound"),
            Some(&["afghan".to_string(), "basset".to_string(), "blood".to_string()][..])
        );
        assert_eq!(list.sub_breeds("pug"), Some(&[][..]));
        assert_eq!(list.sub_breeds("poodle"), None);
        assert_eq!(
            list.qualified_names(),
            vec![
                "bulldog-boston",
                "bulldog-french",
                "hound-afghan",
                "hound-basset",
                "hound-blood",
                "pug",
            ]
        );
    }
}
