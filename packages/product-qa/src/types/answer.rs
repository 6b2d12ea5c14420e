use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of information a question asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Weight,
    Dimensions,
    Battery,
    Flow,
    General,
}

impl Attribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Weight => "weight",
            Attribute::Dimensions => "dimensions",
            Attribute::Battery => "battery",
            Attribute::Flow => "flow",
            Attribute::General => "general",
        }
    }

    /// Capitalised form used at the start of an answer sentence.
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Weight => "Weight",
            Attribute::Dimensions => "Dimensions",
            Attribute::Battery => "Battery",
            Attribute::Flow => "Flow",
            Attribute::General => "General",
        }
    }

    /// Whether an extractor exists for this attribute.
    pub fn is_extractable(&self) -> bool {
        !matches!(self, Attribute::General)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response to a single question.
///
/// Every failure mode is encoded in the fields; callers always get something
/// renderable. `None` fields are omitted from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub ok: bool,
    pub answer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<Attribute>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,

    /// Title similarity on a 0-100 scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
}

impl AnswerResult {
    /// No product could be resolved from the question.
    pub fn product_not_found(suggestions: Vec<String>) -> Self {
        Self {
            ok: false,
            answer: "I couldn’t find that product. Please share the exact product name or a link to the product page.".to_string(),
            product: None,
            attribute: None,
            value: None,
            suggestions: Some(suggestions),
            confidence: Some(0),
        }
    }

    /// An extractor produced a value.
    pub fn extracted(product: &str, attribute: Attribute, value: String, confidence: u8) -> Self {
        Self {
            ok: true,
            answer: format!("{} for **{}**: {}", attribute.label(), product, value),
            product: Some(product.to_string()),
            attribute: Some(attribute),
            value: Some(value),
            suggestions: None,
            confidence: Some(confidence),
        }
    }

    /// The product resolved but the attribute could not be found in its text.
    pub fn attribute_missing(product: &str, attribute: Attribute, confidence: u8) -> Self {
        Self {
            ok: false,
            answer: format!(
                "I couldn’t find {} details for **{}** in the current data.",
                attribute, product
            ),
            product: Some(product.to_string()),
            attribute: Some(attribute),
            value: None,
            suggestions: None,
            confidence: Some(confidence),
        }
    }

    /// General question: answer with a short description overview.
    pub fn overview(product: &str, summary: &str, confidence: u8) -> Self {
        Self {
            ok: true,
            answer: format!(
                "I found **{}**. Here’s a quick overview: {}",
                product, summary
            ),
            product: Some(product.to_string()),
            attribute: Some(Attribute::General),
            value: None,
            suggestions: None,
            confidence: Some(confidence),
        }
    }
}
