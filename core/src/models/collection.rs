use serde::{Deserialize, Serialize};

/// One page of a collection query, plus the engine's total match count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse<T> {
    #[serde(default = "Vec::new")]
    pub collection: Vec<T>,
    #[serde(default)]
    pub total: i64,
}

impl<T> Default for CollectionResponse<T> {
    fn default() -> Self {
        Self {
            collection: Vec::new(),
            total: 0,
        }
    }
}

impl<T> CollectionResponse<T> {
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCollectionResponse {
    pub deleted: i64,
}
