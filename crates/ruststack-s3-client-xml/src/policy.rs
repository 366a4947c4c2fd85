//! Text conversion with per-field failure policies.
//!
//! S3 responses are converted leniently in some places and strictly in
//! others, and the choice is made field by field. Every numeric and boolean
//! field a handler converts is listed in [`Field`], and [`Field::policy`] is
//! the single table saying what happens when its text does not convert.

use chrono::{DateTime, Utc};

use crate::error::XmlError;

/// What to do when a numeric field does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericPolicy {
    /// Log an error and store -1.
    Sentinel,
    /// Abort the parse.
    Fatal,
}

/// How a boolean field is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanPolicy {
    /// Case-insensitive `true…`/`false…` prefix; anything else aborts.
    StrictPrefix,
    /// Exactly `"true"` is true; anything else is false.
    ExactTrue,
    /// `"true"` in any case is true; anything else is false.
    IgnoreCaseTrue,
}

/// Failure policy of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// An integer field.
    Numeric(NumericPolicy),
    /// A boolean field.
    Boolean(BooleanPolicy),
}

/// Every converted numeric or boolean field of every handler.
///
/// Variants are named after the value they hold; [`Field::element`] gives
/// the element path.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ObjectListingMaxKeys,
    ObjectSize,
    ObjectListingTruncated,
    VersionListingMaxKeys,
    VersionSize,
    VersionListingTruncated,
    VersionIsLatest,
    UploadListingMaxUploads,
    UploadListingTruncated,
    PartNumberMarker,
    NextPartNumberMarker,
    MaxParts,
    PartNumber,
    PartSize,
    PartListingTruncated,
    ExpirationDays,
    TransitionDays,
    NoncurrentVersionExpirationDays,
    NoncurrentVersionTransitionDays,
    CorsMaxAgeSeconds,
    DeletedDeleteMarker,
}

impl Field {
    /// Element path the field is read from.
    #[must_use]
    pub fn element(self) -> &'static str {
        match self {
            Self::ObjectListingMaxKeys => "ListBucketResult/MaxKeys",
            Self::ObjectSize => "ListBucketResult/Contents/Size",
            Self::ObjectListingTruncated => "ListBucketResult/IsTruncated",
            Self::VersionListingMaxKeys => "ListVersionsResult/MaxKeys",
            Self::VersionSize => "ListVersionsResult/Version/Size",
            Self::VersionListingTruncated => "ListVersionsResult/IsTruncated",
            Self::VersionIsLatest => "ListVersionsResult/Version/IsLatest",
            Self::UploadListingMaxUploads => "ListMultipartUploadsResult/MaxUploads",
            Self::UploadListingTruncated => "ListMultipartUploadsResult/IsTruncated",
            Self::PartNumberMarker => "ListPartsResult/PartNumberMarker",
            Self::NextPartNumberMarker => "ListPartsResult/NextPartNumberMarker",
            Self::MaxParts => "ListPartsResult/MaxParts",
            Self::PartNumber => "ListPartsResult/Part/PartNumber",
            Self::PartSize => "ListPartsResult/Part/Size",
            Self::PartListingTruncated => "ListPartsResult/IsTruncated",
            Self::ExpirationDays => "LifecycleConfiguration/Rule/Expiration/Days",
            Self::TransitionDays => "LifecycleConfiguration/Rule/Transition/Days",
            Self::NoncurrentVersionExpirationDays => {
                "LifecycleConfiguration/Rule/NoncurrentVersionExpiration/NoncurrentDays"
            }
            Self::NoncurrentVersionTransitionDays => {
                "LifecycleConfiguration/Rule/NoncurrentVersionTransition/NoncurrentDays"
            }
            Self::CorsMaxAgeSeconds => "CORSConfiguration/CORSRule/MaxAgeSeconds",
            Self::DeletedDeleteMarker => "DeleteResult/Deleted/DeleteMarker",
        }
    }

    /// The failure policy of this field.
    #[must_use]
    pub fn policy(self) -> Policy {
        use BooleanPolicy::{ExactTrue, IgnoreCaseTrue, StrictPrefix};
        use NumericPolicy::{Fatal, Sentinel};

        match self {
            Self::ObjectListingMaxKeys | Self::ObjectSize => Policy::Numeric(Sentinel),
            Self::ObjectListingTruncated => Policy::Boolean(StrictPrefix),
            Self::VersionListingMaxKeys
            | Self::VersionSize
            | Self::UploadListingMaxUploads
            | Self::PartNumberMarker
            | Self::NextPartNumberMarker
            | Self::MaxParts
            | Self::PartNumber
            | Self::PartSize
            | Self::ExpirationDays
            | Self::TransitionDays
            | Self::NoncurrentVersionExpirationDays
            | Self::NoncurrentVersionTransitionDays
            | Self::CorsMaxAgeSeconds => Policy::Numeric(Fatal),
            Self::VersionListingTruncated | Self::VersionIsLatest | Self::DeletedDeleteMarker => {
                Policy::Boolean(ExactTrue)
            }
            Self::UploadListingTruncated | Self::PartListingTruncated => {
                Policy::Boolean(IgnoreCaseTrue)
            }
        }
    }

    fn numeric_policy(self) -> Result<NumericPolicy, XmlError> {
        match self.policy() {
            Policy::Numeric(p) => Ok(p),
            Policy::Boolean(_) => Err(XmlError::InvalidState(format!(
                "{} is not a numeric field",
                self.element()
            ))),
        }
    }
}

/// Convert the text of a 32-bit integer field.
pub fn parse_int(field: Field, text: &str) -> Result<i32, XmlError> {
    parse_number(field, text)
}

/// Convert the text of a 64-bit integer field.
pub fn parse_long(field: Field, text: &str) -> Result<i64, XmlError> {
    parse_number(field, text)
}

/// Convert an integer field whose element may be present but empty.
pub fn parse_optional_int(field: Field, text: &str) -> Result<Option<i32>, XmlError> {
    if text.is_empty() {
        return Ok(None);
    }
    parse_int(field, text).map(Some)
}

fn parse_number<T>(field: Field, text: &str) -> Result<T, XmlError>
where
    T: std::str::FromStr + From<i8>,
    T::Err: std::fmt::Display,
{
    let policy = field.numeric_policy()?;
    match text.parse::<T>() {
        Ok(value) => Ok(value),
        Err(e) => match policy {
            NumericPolicy::Sentinel => {
                tracing::error!(
                    field = field.element(),
                    value = text,
                    error = %e,
                    "unable to parse integer value, using -1"
                );
                Ok(T::from(-1i8))
            }
            NumericPolicy::Fatal => Err(XmlError::ParseError(format!(
                "invalid integer '{text}' in {}: {e}",
                field.element()
            ))),
        },
    }
}

/// Convert the text of a boolean field.
pub fn parse_flag(field: Field, text: &str) -> Result<bool, XmlError> {
    let Policy::Boolean(policy) = field.policy() else {
        return Err(XmlError::InvalidState(format!(
            "{} is not a boolean field",
            field.element()
        )));
    };

    match policy {
        BooleanPolicy::StrictPrefix => {
            let lower = text.to_ascii_lowercase();
            if lower.starts_with("false") {
                Ok(false)
            } else if lower.starts_with("true") {
                Ok(true)
            } else {
                Err(XmlError::ParseError(format!(
                    "invalid boolean '{text}' in {}",
                    field.element()
                )))
            }
        }
        BooleanPolicy::ExactTrue => Ok(text == "true"),
        BooleanPolicy::IgnoreCaseTrue => Ok(text.eq_ignore_ascii_case("true")),
    }
}

/// Empty text means "not set".
#[must_use]
pub fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}

/// Strip the double quotes S3 puts around entity tags.
#[must_use]
pub fn remove_quotes(text: &str) -> String {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text).to_owned()
}

/// Parse an S3 timestamp.
///
/// S3 sends ISO 8601 (`2006-02-03T16:45:09.000Z`); RFC 2822 is accepted as a
/// fallback. A timestamp that matches neither aborts the parse.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, XmlError> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.fZ")
                .map(|ndt| ndt.and_utc())
        })
        .or_else(|_| DateTime::parse_from_rfc2822(text).map(|dt| dt.with_timezone(&Utc)))
        .map_err(|e| XmlError::ParseError(format!("invalid timestamp '{text}': {e}")))
}
