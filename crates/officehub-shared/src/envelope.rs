/// Collection responses may come back bare or inside a pagination envelope
///
/// Always unwrap with [`ListEnvelope::into_vec`] before use
#[derive(Debug, serde::Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Paginated {
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
    },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Paginated { results, .. } => results,
            ListEnvelope::Bare(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::bare("[1,2,3]")]
    #[case::paginated(r#"{"count":3,"next":null,"previous":null,"results":[1,2,3]}"#)]
    #[case::paginated_no_count(r#"{"results":[1,2,3]}"#)]
    fn unwraps_both_shapes(#[case] body: &str) {
        let actual: ListEnvelope<u32> = serde_json::from_str(body).unwrap();
        assert_eq!(actual.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn single_object_is_not_a_collection() {
        let actual: Result<ListEnvelope<u32>, _> = serde_json::from_str(r#"{"detail":"x"}"#);
        assert!(actual.is_err());
    }
}
