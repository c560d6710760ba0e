//! The fixed operation set recognized by the connector.
//!
//! # Responsibilities
//! - Name the operations the connector intercepts
//! - Parse an operation id by exact string match
//!
//! # Design Decisions
//! - Exact, case-sensitive matching (operation ids are platform constants)
//! - Unrecognized ids are not an error; they take the default path
//! - Static dispatch: the set is closed at compile time

/// Operations with a dedicated handler in the script.
///
/// Anything outside this set is forwarded through the default path, so a new
/// variant is only needed once an operation grows its own handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Start an actor run.
    RunActor,
    /// Start a run of a saved actor task.
    RunTask,
    /// Read items from a dataset.
    GetDatasetItems,
    /// Read a single key-value store record.
    GetKeyValueStoreRecord,
    /// Run the one-off single-URL scraper.
    ScrapeSingleUrl,
}

impl Operation {
    /// Parse an operation id.
    ///
    /// Returns `None` for any id without a dedicated handler, including the
    /// empty string.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "RunActor" => Some(Self::RunActor),
            "RunTask" => Some(Self::RunTask),
            "GetDatasetItems" => Some(Self::GetDatasetItems),
            "GetKeyValueStoreRecord" => Some(Self::GetKeyValueStoreRecord),
            "ScrapeSingleUrl" => Some(Self::ScrapeSingleUrl),
            _ => None,
        }
    }

    /// The platform-facing operation id.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RunActor => "RunActor",
            Self::RunTask => "RunTask",
            Self::GetDatasetItems => "GetDatasetItems",
            Self::GetKeyValueStoreRecord => "GetKeyValueStoreRecord",
            Self::ScrapeSingleUrl => "ScrapeSingleUrl",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_recognized_id() {
        assert_eq!(Operation::parse("RunActor"), Some(Operation::RunActor));
        assert_eq!(Operation::parse("RunTask"), Some(Operation::RunTask));
        assert_eq!(
            Operation::parse("GetDatasetItems"),
            Some(Operation::GetDatasetItems)
        );
        assert_eq!(
            Operation::parse("GetKeyValueStoreRecord"),
            Some(Operation::GetKeyValueStoreRecord)
        );
        assert_eq!(
            Operation::parse("ScrapeSingleUrl"),
            Some(Operation::ScrapeSingleUrl)
        );
    }

    #[test]
    fn unknown_ids_parse_to_none() {
        assert_eq!(Operation::parse("UnknownOp"), None);
        assert_eq!(Operation::parse(""), None);
        // Matching is exact and case-sensitive.
        assert_eq!(Operation::parse("runactor"), None);
        assert_eq!(Operation::parse("RunActor "), None);
    }

    #[test]
    fn id_round_trips_through_as_str() {
        for op in [
            Operation::RunActor,
            Operation::RunTask,
            Operation::GetDatasetItems,
            Operation::GetKeyValueStoreRecord,
            Operation::ScrapeSingleUrl,
        ] {
            assert_eq!(Operation::parse(op.as_str()), Some(op));
        }
    }
}
