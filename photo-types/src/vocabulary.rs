//! Closed vocabularies used by the photo schema.
//!
//! Camera make/model/lens variants serialize as the raw EXIF strings cameras
//! write, and carry a display name for the site.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Photography category tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PhotoTag {
    Concert,
    Automotive,
    Travel,
    Street,
    Other,
}

/// Kind of external link attached to a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LinkType {
    Instagram,
    Bandcamp,
    Spotify,
}

/// EXIF `Make` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter)]
pub enum CameraMake {
    #[serde(rename = "SONY")]
    #[strum(serialize = "SONY")]
    Sony,
    #[serde(rename = "Canon")]
    #[strum(serialize = "Canon")]
    Canon,
    #[serde(rename = "FUJIFILM")]
    #[strum(serialize = "FUJIFILM")]
    Fujifilm,
    #[serde(rename = "NIKON CORPORATION")]
    #[strum(serialize = "NIKON CORPORATION")]
    Nikon,
    #[serde(rename = "Apple")]
    #[strum(serialize = "Apple")]
    Apple,
    #[serde(rename = "DJI")]
    #[strum(serialize = "DJI")]
    Dji,
}

impl CameraMake {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sony => "Sony",
            Self::Canon => "Canon",
            Self::Fujifilm => "Fujifilm",
            Self::Nikon => "Nikon",
            Self::Apple => "Apple",
            Self::Dji => "DJI",
        }
    }
}

/// EXIF `Model` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter)]
pub enum CameraModel {
    #[serde(rename = "ILCE-7M3")]
    #[strum(serialize = "ILCE-7M3")]
    SonyA7III,
    #[serde(rename = "ILCE-7RM4")]
    #[strum(serialize = "ILCE-7RM4")]
    SonyA7RIV,
    #[serde(rename = "ILCE-6400")]
    #[strum(serialize = "ILCE-6400")]
    SonyA6400,
    #[serde(rename = "Canon EOS 5D Mark IV")]
    #[strum(serialize = "Canon EOS 5D Mark IV")]
    Canon5DMarkIV,
    #[serde(rename = "Canon EOS R6")]
    #[strum(serialize = "Canon EOS R6")]
    CanonR6,
    #[serde(rename = "X-T4")]
    #[strum(serialize = "X-T4")]
    FujifilmXT4,
    #[serde(rename = "X100V")]
    #[strum(serialize = "X100V")]
    FujifilmX100V,
    #[serde(rename = "NIKON Z 6_2")]
    #[strum(serialize = "NIKON Z 6_2")]
    NikonZ6II,
    #[serde(rename = "iPhone 15 Pro")]
    #[strum(serialize = "iPhone 15 Pro")]
    IPhone15Pro,
    #[serde(rename = "FC3582")]
    #[strum(serialize = "FC3582")]
    DjiMini3Pro,
}

impl CameraModel {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SonyA7III => "Sony α7 III",
            Self::SonyA7RIV => "Sony α7R IV",
            Self::SonyA6400 => "Sony α6400",
            Self::Canon5DMarkIV => "Canon EOS 5D Mark IV",
            Self::CanonR6 => "Canon EOS R6",
            Self::FujifilmXT4 => "Fujifilm X-T4",
            Self::FujifilmX100V => "Fujifilm X100V",
            Self::NikonZ6II => "Nikon Z6 II",
            Self::IPhone15Pro => "iPhone 15 Pro",
            Self::DjiMini3Pro => "DJI Mini 3 Pro",
        }
    }
}

/// EXIF `LensModel` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter)]
pub enum LensModel {
    #[serde(rename = "FE 24-70mm F2.8 GM")]
    #[strum(serialize = "FE 24-70mm F2.8 GM")]
    Fe2470Gm,
    #[serde(rename = "FE 70-200mm F2.8 GM OSS")]
    #[strum(serialize = "FE 70-200mm F2.8 GM OSS")]
    Fe70200Gm,
    #[serde(rename = "FE 85mm F1.8")]
    #[strum(serialize = "FE 85mm F1.8")]
    Fe85F18,
    #[serde(rename = "FE 35mm F1.8")]
    #[strum(serialize = "FE 35mm F1.8")]
    Fe35F18,
    #[serde(rename = "XF23mmF2 R WR")]
    #[strum(serialize = "XF23mmF2 R WR")]
    Xf23F2,
    #[serde(rename = "RF24-105mm F4 L IS USM")]
    #[strum(serialize = "RF24-105mm F4 L IS USM")]
    Rf24105F4,
}

impl LensModel {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Fe2470Gm => "Sony FE 24-70mm f/2.8 GM",
            Self::Fe70200Gm => "Sony FE 70-200mm f/2.8 GM OSS",
            Self::Fe85F18 => "Sony FE 85mm f/1.8",
            Self::Fe35F18 => "Sony FE 35mm f/1.8",
            Self::Xf23F2 => "Fujinon XF 23mm f/2 R WR",
            Self::Rf24105F4 => "Canon RF 24-105mm f/4L IS USM",
        }
    }
}

/// A raw value and its display name, for populating form selects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub value: String,
    pub label: String,
}

/// Every closed vocabulary in one payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    pub tags: Vec<String>,
    pub link_types: Vec<String>,
    pub makes: Vec<VocabularyEntry>,
    pub models: Vec<VocabularyEntry>,
    pub lenses: Vec<VocabularyEntry>,
    pub countries: Vec<String>,
}

impl Vocabulary {
    pub fn collect() -> Self {
        Self {
            tags: PhotoTag::iter().map(|t| t.as_ref().to_string()).collect(),
            link_types: LinkType::iter().map(|t| t.as_ref().to_string()).collect(),
            makes: CameraMake::iter()
                .map(|m| entry(m.as_ref(), m.display_name()))
                .collect(),
            models: CameraModel::iter()
                .map(|m| entry(m.as_ref(), m.display_name()))
                .collect(),
            lenses: LensModel::iter()
                .map(|l| entry(l.as_ref(), l.display_name()))
                .collect(),
            countries: crate::country::ISO_COUNTRY_CODES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

fn entry(value: &str, label: &str) -> VocabularyEntry {
    VocabularyEntry {
        value: value.to_string(),
        label: label.to_string(),
    }
}
