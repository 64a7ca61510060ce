use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// 6x6 letter matrix, row-major. Cells serialize as one-character strings.
pub type Grid = Vec<Vec<char>>;

/// Ordered path of grid coordinates spelling an answer word
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Placement {
    pub path: Vec<Position>,
}

/// Level as authored upstream, before grids are generated.
/// Extra fields left over from a previous generation run are ignored on
/// read, so the tool can be re-run over its own output.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelRecord {
    pub id: i64,
    pub title: String,
    #[serde(rename = "timeLimit")]
    pub time_limit: u32,
    pub questions: Vec<QuestionRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub q_id: i64,
    pub coins: u32,
    pub question: String,
    pub answer: String,
}

/// Level emitted to the client, carrying playable grids.
/// Field declaration order fixes the JSON field order.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedLevel {
    pub id: i64,
    pub title: String,
    #[serde(rename = "timeLimit")]
    pub time_limit: u32,
    pub orientation: String,
    #[serde(rename = "gridSize")]
    pub grid_size: usize,
    pub questions: Vec<GeneratedQuestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedQuestion {
    pub q_id: i64,
    pub coins: u32,
    pub grid: Grid,
    #[serde(rename = "answerPlacement")]
    pub answer_placement: Placement,
    pub question: String,
    pub answer: String,
}
