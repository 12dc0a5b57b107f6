use std::fmt;
use std::sync::Arc;

use lumos_core::{DesignConfiguration, Field, FieldValue, FontFamily};

use crate::error::SessionError;
use crate::font::{FontLoader, FontResource};

type Subscriber = Box<dyn FnMut(&DesignConfiguration, Field)>;

/// Owns the session's configuration and the one font resource it implies.
///
/// Every mutation replaces exactly one field and then calls every
/// subscriber with the new snapshot. Changing the font family releases the
/// previous font before acquiring the next one, so at most one font
/// resource is held at any time. Dropping the store releases it.
pub struct ConfigStore {
    config: DesignConfiguration,
    loader: Arc<dyn FontLoader>,
    font: Option<FontResource>,
    subscribers: Vec<Subscriber>,
}

impl ConfigStore {
    /// Start a session with default values and load the default font.
    pub fn new(loader: Arc<dyn FontLoader>) -> Result<Self, SessionError> {
        Self::with_config(DesignConfiguration::default(), loader)
    }

    pub fn with_config(
        config: DesignConfiguration,
        loader: Arc<dyn FontLoader>,
    ) -> Result<Self, SessionError> {
        let font = FontResource::acquire(Arc::clone(&loader), config.font_family)?;
        tracing::info!(font = %config.font_family, "session started");
        Ok(Self {
            config,
            loader,
            font: Some(font),
            subscribers: Vec::new(),
        })
    }

    /// The current snapshot.
    pub fn config(&self) -> &DesignConfiguration {
        &self.config
    }

    pub fn get(&self, field: Field) -> FieldValue {
        self.config.get(field)
    }

    /// The font resource currently held, if the last load succeeded.
    pub fn font(&self) -> Option<&FontResource> {
        self.font.as_ref()
    }

    pub fn loader(&self) -> &Arc<dyn FontLoader> {
        &self.loader
    }

    /// Register a dependent to re-run after every mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&DesignConfiguration, Field) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Replace one field and notify subscribers. Returns the previous value.
    ///
    /// A font-loader failure is returned after the field has been updated
    /// and subscribers notified; the session is then left without a font
    /// resource until a later font-family set succeeds, including one that
    /// repeats the current family.
    pub fn set(&mut self, value: FieldValue) -> Result<FieldValue, SessionError> {
        let field = value.field();

        if let (Some(range), Some(n)) = (field.recommended_range(), value.as_number())
            && !range.contains(n)
        {
            tracing::warn!(
                %field,
                value = n,
                min = range.min,
                max = range.max,
                "value outside recommended range"
            );
        }

        let previous = self.config.apply(value);
        tracing::debug!(%field, from = %previous, to = %self.config.get(field), "field set");

        let font_result = match &previous {
            FieldValue::FontFamily(old)
                if *old != self.config.font_family || self.font.is_none() =>
            {
                self.reload_font(self.config.font_family)
            }
            _ => Ok(()),
        };

        for subscriber in &mut self.subscribers {
            subscriber(&self.config, field);
        }

        font_result.map(|()| previous)
    }

    /// Parse `raw` for the field named `key` and set it.
    pub fn set_raw(&mut self, key: &str, raw: &str) -> Result<FieldValue, SessionError> {
        let field: Field = key.parse()?;
        let value = field.parse_value(raw)?;
        self.set(value)
    }

    pub fn set_font_family(&mut self, family: FontFamily) -> Result<FontFamily, SessionError> {
        let previous = self.config.font_family;
        self.set(FieldValue::FontFamily(family))?;
        Ok(previous)
    }

    fn reload_font(&mut self, family: FontFamily) -> Result<(), SessionError> {
        // Release before acquiring so two resources are never held at once.
        self.font = None;
        self.font = Some(FontResource::acquire(Arc::clone(&self.loader), family)?);
        Ok(())
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("config", &self.config)
            .field("font", &self.font)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
