use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::Identifiable;

/// Kind of external party that can hold an artefact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequesterType {
    Investigador,
    Departamento,
    Exhibicion,
}

/// External party referenced by loans and movements, never owned by them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequesterModel {
    pub id: i64,

    #[serde(
        rename = "type",
        serialize_with = "serialize_requester_type",
        deserialize_with = "deserialize_requester_type"
    )]
    pub requester_type: RequesterType,

    #[serde(default)]
    pub first_name: Option<HeaplessString<100>>,

    #[serde(default)]
    pub last_name: Option<HeaplessString<100>>,

    #[serde(default)]
    pub institution: Option<HeaplessString<200>>,
}

impl Identifiable for RequesterModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

fn serialize_requester_type<S>(
    requester_type: &RequesterType,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(match requester_type {
        RequesterType::Investigador => "Investigador",
        RequesterType::Departamento => "Departamento",
        RequesterType::Exhibicion => "Exhibición",
    })
}

fn deserialize_requester_type<'de, D>(deserializer: D) -> Result<RequesterType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.as_str() {
        "Investigador" => Ok(RequesterType::Investigador),
        "Departamento" => Ok(RequesterType::Departamento),
        "Exhibición" => Ok(RequesterType::Exhibicion),
        _ => Err(serde::de::Error::custom(format!(
            "Unknown requester type: {}",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requester_type_round_trips_with_accented_label() {
        let requester = RequesterModel {
            id: 9,
            requester_type: RequesterType::Exhibicion,
            first_name: None,
            last_name: None,
            institution: Some(HeaplessString::try_from("Sala Norte").unwrap()),
        };
        let json = serde_json::to_value(&requester).unwrap();
        assert_eq!(json["type"], "Exhibición");
        let back: RequesterModel = serde_json::from_value(json).unwrap();
        assert_eq!(back.requester_type, RequesterType::Exhibicion);
    }

    #[test]
    fn unknown_requester_type_is_a_decode_error() {
        let json = serde_json::json!({ "id": 1, "type": "Visitante" });
        assert!(serde_json::from_value::<RequesterModel>(json).is_err());
    }
}
