pub mod level;

pub use level::{
    // Input records, as authored upstream
    LevelRecord, QuestionRecord,
    // Output records carrying generated grids
    GeneratedLevel, GeneratedQuestion,
    // Grid types
    Grid, Placement, Position,
};
