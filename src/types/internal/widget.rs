/// A widget as held by the store
///
/// `name` is the natural key: it is unique across the store and never
/// changes once the widget exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Widget {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }

    /// Apply a partial update
    ///
    /// Only the fields present in the patch are overwritten; the name is left alone.
    pub fn apply(&mut self, patch: WidgetPatch) {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}

/// Fields an update is allowed to touch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetPatch {
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl WidgetPatch {
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}
