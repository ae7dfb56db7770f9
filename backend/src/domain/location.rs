//! Postal directory records and response-shape discrimination.
//!
//! The directory answers `200 OK` for three different situations: a known
//! code, an unknown code (record with blank fields) and a malformed code
//! (a distinct `{"erro": ...}` envelope). [`DirectoryAnswer::from_body`]
//! tells them apart by decoding the body against each shape in a fixed order.

use serde::Deserialize;
use serde::de::IgnoredAny;

/// Location resolved from a postal code.
///
/// Only `city` is consumed downstream; the administrative fields are kept for
/// logging and future use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationRecord {
    /// Municipality name; never empty on a resolved record.
    pub city: String,
    /// Postal code echoed by the directory.
    pub zipcode: Option<String>,
    /// Street name.
    pub street: Option<String>,
    /// Address complement.
    pub complement: Option<String>,
    /// Neighbourhood.
    pub district: Option<String>,
    /// Two-letter state code.
    pub state: Option<String>,
    /// IBGE municipality code.
    pub ibge_code: Option<String>,
    /// GIA tax code (São Paulo only).
    pub gia_code: Option<String>,
    /// Telephone area code.
    pub area_code: Option<String>,
    /// SIAFI municipality code.
    pub siafi_code: Option<String>,
}

/// Success shape. Every field is optional so blank records still decode;
/// a `null` or absent city reads as blank.
#[derive(Debug, Deserialize)]
struct DirectoryRecordDto {
    localidade: Option<String>,
    cep: Option<String>,
    logradouro: Option<String>,
    complemento: Option<String>,
    bairro: Option<String>,
    uf: Option<String>,
    ibge: Option<String>,
    gia: Option<String>,
    ddd: Option<String>,
    siafi: Option<String>,
}

/// Error shape: an object carrying an `erro` flag of any type.
#[derive(Debug, Deserialize)]
struct DirectoryErrorDto {
    #[serde(rename = "erro")]
    _erro: IgnoredAny,
}

impl From<DirectoryRecordDto> for LocationRecord {
    fn from(dto: DirectoryRecordDto) -> Self {
        Self {
            city: dto.localidade.unwrap_or_default(),
            zipcode: non_blank(dto.cep),
            street: non_blank(dto.logradouro),
            complement: non_blank(dto.complemento),
            district: non_blank(dto.bairro),
            state: non_blank(dto.uf),
            ibge_code: non_blank(dto.ibge),
            gia_code: non_blank(dto.gia),
            area_code: non_blank(dto.ddd),
            siafi_code: non_blank(dto.siafi),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Classified `200 OK` body from the postal directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryAnswer {
    /// Record with a non-empty city.
    Found(LocationRecord),
    /// Record shape with an empty city.
    Unknown,
    /// The directory's own "malformed code" envelope.
    ProviderError,
    /// Neither shape; carries the success-shape parse error.
    Malformed(String),
}

impl DirectoryAnswer {
    /// Decode a response body, trying the record shape before the error shape.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::DirectoryAnswer;
    ///
    /// let answer = DirectoryAnswer::from_body(br#"{"localidade":"Vila Velha"}"#);
    /// assert!(matches!(answer, DirectoryAnswer::Found(record) if record.city == "Vila Velha"));
    ///
    /// assert_eq!(DirectoryAnswer::from_body(br#"{"localidade":""}"#), DirectoryAnswer::Unknown);
    /// ```
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<DirectoryRecordDto>(body) {
            Ok(dto) if dto.localidade.as_deref().is_none_or(str::is_empty) => Self::Unknown,
            Ok(dto) => Self::Found(dto.into()),
            Err(record_error) => match serde_json::from_slice::<DirectoryErrorDto>(body) {
                Ok(_) => Self::ProviderError,
                Err(_) => Self::Malformed(record_error.to_string()),
            },
        }
    }
}
