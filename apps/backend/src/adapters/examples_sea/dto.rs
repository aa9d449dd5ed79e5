//! Write-side DTOs for the examples adapter.

#[derive(Debug, Clone)]
pub struct ExampleCreate {
    pub example1: String,
    pub example2: String,
}

#[derive(Debug, Clone)]
pub struct ExampleUpdate {
    pub id: i64,
    pub example1: String,
    pub example2: String,
}
