//! Country code and country name types.

/// An ISO 3166-1 alpha-2 country code as read from a resource file.
///
/// Codes are opaque: they are trimmed but otherwise kept exactly as given,
/// so `"de"` and `"DE"` are different codes.
///
/// # Examples
///
/// ```
/// use iso3166_types::CountryCode;
///
/// let austria: CountryCode = "AT".to_string();
/// ```
pub type CountryCode = String;

/// A localized country name, e.g. `"Österreich"`.
pub type CountryName = String;
