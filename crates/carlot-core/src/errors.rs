use thiserror::Error;

/// Result type alias using CarLotError
pub type Result<T> = std::result::Result<T, CarLotError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (and the CLI) can use
/// for programmatic handling without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Write-path reference checks
    /// A write referenced a brand or model that does not exist (`add`)
    Validation,
    /// A write targeted a vehicle, model or brand id that does not exist (`update`)
    NotFound,

    // Input/Construction
    InvalidInput,

    // Integration/IO
    Io,
    Serialization,
    Concurrency,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context for
/// the message shown to a user.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<&'static str>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the entity kind ("vehicle", "model", "brand")
    pub fn with_entity(mut self, entity: &'static str) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity kind, if any
    pub fn entity(&self) -> Option<&'static str> {
        self.entity
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        match (self.entity, &self.entity_id) {
            (Some(entity), Some(id)) => write!(f, " ({}: {})", entity, id)?,
            (None, Some(id)) => write!(f, " (entity_id: {})", id)?,
            _ => {}
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for CarLot operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarLotError {
    // ===== Validation Errors =====
    /// `add` referenced a brand or model that does not exist
    #[error("Referenced brand or model does not exist (brand: {brand_id}, model: {model_id})")]
    InvalidReference { brand_id: String, model_id: String },

    // ===== Not Found Errors =====
    /// Vehicle not found in store
    #[error("Vehicle not found: {vehicle_id}")]
    VehicleNotFound { vehicle_id: String },

    /// Model not found in store
    #[error("Model not found: {model_id}")]
    ModelNotFound { model_id: String },

    /// Brand not found in store
    #[error("Brand not found: {brand_id}")]
    BrandNotFound { brand_id: String },

    // ===== Construction / Input Errors =====
    /// The same id appears twice within one relation
    #[error("Duplicate {relation} id: {id}")]
    DuplicateId { relation: &'static str, id: String },

    /// A brand filter named a brand that is not in the store
    #[error("Selected brand does not exist: {brand_id}")]
    UnknownBrandFilter { brand_id: String },

    // ===== Internal Errors =====
    /// Serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// A shared collection lock was poisoned by a panicking writer
    #[error("Collection lock poisoned: {message}")]
    LockPoisoned { message: String },

    /// Internal error (should not happen)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CarLotError {
    /// Classify this error without converting it
    pub fn kind(&self) -> ExErrorKind {
        match self {
            CarLotError::InvalidReference { .. } => ExErrorKind::Validation,
            CarLotError::VehicleNotFound { .. }
            | CarLotError::ModelNotFound { .. }
            | CarLotError::BrandNotFound { .. } => ExErrorKind::NotFound,
            CarLotError::DuplicateId { .. } | CarLotError::UnknownBrandFilter { .. } => {
                ExErrorKind::InvalidInput
            }
            CarLotError::Serialization { .. } => ExErrorKind::Serialization,
            CarLotError::LockPoisoned { .. } => ExErrorKind::Concurrency,
            CarLotError::Internal { .. } => ExErrorKind::Internal,
        }
    }

    /// Which entity a not-found error refers to
    pub fn missing_entity(&self) -> Option<&'static str> {
        match self {
            CarLotError::VehicleNotFound { .. } => Some("vehicle"),
            CarLotError::ModelNotFound { .. } => Some("model"),
            CarLotError::BrandNotFound { .. } => Some("brand"),
            _ => None,
        }
    }
}

/// Conversion from CarLotError to ExError
impl From<CarLotError> for ExError {
    fn from(err: CarLotError) -> Self {
        let kind = err.kind();
        let entity = err.missing_entity();
        let message = err.to_string();

        let ex = match err {
            CarLotError::InvalidReference { model_id, .. } => ExError::new(kind)
                .with_op("add")
                .with_entity("model")
                .with_entity_id(model_id),

            CarLotError::VehicleNotFound { vehicle_id: id }
            | CarLotError::ModelNotFound { model_id: id }
            | CarLotError::BrandNotFound { brand_id: id } => ExError::new(kind).with_entity_id(id),

            CarLotError::DuplicateId { id, .. } => ExError::new(kind)
                .with_op("store_new")
                .with_entity_id(id),

            CarLotError::UnknownBrandFilter { brand_id } => ExError::new(kind)
                .with_op("render_inventory")
                .with_entity("brand")
                .with_entity_id(brand_id),

            CarLotError::Serialization { .. }
            | CarLotError::LockPoisoned { .. }
            | CarLotError::Internal { .. } => ExError::new(kind),
        };

        let ex = match entity {
            Some(entity) => ex.with_entity(entity),
            None => ex,
        };
        ex.with_message(message)
    }
}

/// Conversion from serde_json::Error to CarLotError
impl From<serde_json::Error> for CarLotError {
    fn from(err: serde_json::Error) -> Self {
        CarLotError::Serialization {
            message: err.to_string(),
        }
    }
}
