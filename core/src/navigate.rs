use thiserror::Error;

/// Structural failures while walking the dataset tree.
#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("no `{0}` records present")]
    MissingCategory(&'static str),
    #[error("`{category}` has {len} records, index {index} is out of range")]
    IndexOutOfRange {
        category: &'static str,
        index: usize,
        len: usize,
    },
}

/// Positional access into a child record category.
pub fn child_at<'a, T>(
    records: &'a [T],
    category: &'static str,
    index: usize,
) -> Result<&'a T, NavigationError> {
    if records.is_empty() {
        return Err(NavigationError::MissingCategory(category));
    }
    records.get(index).ok_or(NavigationError::IndexOutOfRange {
        category,
        index,
        len: records.len(),
    })
}

/// The primary record of a category: its first entry. Every renderer
/// consults exactly one record per category, so this is the accessor the
/// chart paths are built from.
pub fn primary<'a, T>(records: &'a [T], category: &'static str) -> Result<&'a T, NavigationError> {
    child_at(records, category, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_returns_first_record() {
        let records = vec!["first", "second"];
        assert_eq!(*primary(&records, "velocityProfile").unwrap(), "first");
    }

    #[test]
    fn primary_reports_missing_category() {
        let records: Vec<&str> = Vec::new();
        let err = primary(&records, "dispersionData").unwrap_err();
        assert!(matches!(err, NavigationError::MissingCategory("dispersionData")));
    }

    #[test]
    fn child_at_reports_index_out_of_range() {
        let records = vec!["only"];
        let err = child_at(&records, "labTest", 3).unwrap_err();
        match err {
            NavigationError::IndexOutOfRange {
                category,
                index,
                len,
            } => {
                assert_eq!(category, "labTest");
                assert_eq!(index, 3);
                assert_eq!(len, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
