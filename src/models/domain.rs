use serde::{Deserialize, Serialize};

/// Freelancer gender. Male is the one-hot reference category and gets no
/// dummy column of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn is_female(&self) -> bool {
        matches!(self, Gender::Female)
    }
}

/// Supported countries. USA is the one-hot reference category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    USA,
    UK,
    Germany,
    Australia,
    India,
    Canada,
    France,
    Spain,
}

impl Country {
    pub const REFERENCE: Country = Country::USA;

    /// Non-reference countries in dummy-column order. This list is the
    /// training-time encoding contract; do not reorder.
    pub const NON_REFERENCE: [Country; 7] = [
        Country::UK,
        Country::Germany,
        Country::Australia,
        Country::India,
        Country::Canada,
        Country::France,
        Country::Spain,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Country::USA => "USA",
            Country::UK => "UK",
            Country::Germany => "Germany",
            Country::Australia => "Australia",
            Country::India => "India",
            Country::Canada => "Canada",
            Country::France => "France",
            Country::Spain => "Spain",
        }
    }
}

/// Supported primary languages. English is the one-hot reference category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    German,
    French,
    Hindi,
    Chinese,
    Arabic,
}

impl Language {
    pub const REFERENCE: Language = Language::English;

    /// Non-reference languages in dummy-column order.
    pub const NON_REFERENCE: [Language; 6] = [
        Language::Spanish,
        Language::German,
        Language::French,
        Language::Hindi,
        Language::Chinese,
        Language::Arabic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::French => "French",
            Language::Hindi => "Hindi",
            Language::Chinese => "Chinese",
            Language::Arabic => "Arabic",
        }
    }
}

/// Supported primary skills. Web Development is the one-hot reference
/// category. Wire names keep the original display spelling (spaces, slash)
/// because the trained model's column names embed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Skill {
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Graphic Design")]
    GraphicDesign,
    #[serde(rename = "Data Analysis")]
    DataAnalysis,
    #[serde(rename = "Content Writing")]
    ContentWriting,
    #[serde(rename = "Digital Marketing")]
    DigitalMarketing,
    #[serde(rename = "Mobile Development")]
    MobileDevelopment,
    #[serde(rename = "UI/UX Design")]
    UiUxDesign,
}

impl Skill {
    pub const REFERENCE: Skill = Skill::WebDevelopment;

    /// Non-reference skills in dummy-column order.
    pub const NON_REFERENCE: [Skill; 6] = [
        Skill::GraphicDesign,
        Skill::DataAnalysis,
        Skill::ContentWriting,
        Skill::DigitalMarketing,
        Skill::MobileDevelopment,
        Skill::UiUxDesign,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Skill::WebDevelopment => "Web Development",
            Skill::GraphicDesign => "Graphic Design",
            Skill::DataAnalysis => "Data Analysis",
            Skill::ContentWriting => "Content Writing",
            Skill::DigitalMarketing => "Digital Marketing",
            Skill::MobileDevelopment => "Mobile Development",
            Skill::UiUxDesign => "UI/UX Design",
        }
    }
}

/// Validated freelancer profile. Only produced by the encoder's completeness
/// check; every field is guaranteed present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreelancerProfile {
    pub age: u8,
    pub gender: Gender,
    pub country: Country,
    #[serde(rename = "primaryLanguage")]
    pub primary_language: Language,
    #[serde(rename = "primarySkill")]
    pub primary_skill: Skill,
    #[serde(rename = "yearsExperience")]
    pub years_experience: u8,
    #[serde(rename = "hourlyRate")]
    pub hourly_rate: u16,
    #[serde(rename = "clientRating")]
    pub client_rating: f64,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// Ordered named feature vector fed to the regression model.
///
/// Order is part of the contract: the model was trained against columns in a
/// fixed order, so construction and schema alignment must be deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    names: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        self.names.push(name.into());
        self.values.push(value);
    }

    /// Look up a feature value by column name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// How a prediction was produced: the trained model, or the deterministic
/// heuristic used when inference is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionSource {
    Model,
    Heuristic,
}

/// Qualitative satisfaction bucket derived from the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Excellent,
    Good,
    Average,
}

impl Tier {
    pub const EXCELLENT_MIN: f64 = 80.0;
    pub const GOOD_MIN: f64 = 65.0;

    /// Classify a clamped percentage into a tier.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= Self::EXCELLENT_MIN {
            Tier::Excellent
        } else if percentage >= Self::GOOD_MIN {
            Tier::Good
        } else {
            Tier::Average
        }
    }
}
