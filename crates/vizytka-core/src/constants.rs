/// Name substituted when a roster line carries a phone but no usable name.
pub const PLACEHOLDER_NAME: &str = "no name";

/// Fixed key under which the session contact list is persisted.
pub const SESSION_STORE_KEY: &str = "contacts";

/// File name of the session cache inside the state directory.
pub const SESSION_STORE_FILE: &str = const_str::concat!(SESSION_STORE_KEY, ".json");

/// Country prefix that gets a `+` prepended on export.
pub const UA_COUNTRY_PREFIX: &str = "380";

/// Minimum number of leading digits for a line to count as a contact.
pub const MIN_PHONE_DIGITS: usize = 11;

/// Maximum number of leading digits consumed as the phone.
pub const MAX_PHONE_DIGITS: usize = 12;
