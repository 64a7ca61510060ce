use anyhow::{Context, Result};
use rand::Rng;

use crate::{
    generator::{GridGenerator, GRID_SIZE},
    models::{GeneratedLevel, GeneratedQuestion, LevelRecord},
};

/// Regenerate the whole level collection: one fresh grid per question.
///
/// Answers longer than the grid (and empty answers) are dropped, a level
/// whose every question was dropped is omitted, and everything else keeps
/// its input order. A placement failure aborts the entire batch so a
/// half-regenerated collection is never returned.
pub fn regenerate_levels(
    levels: Vec<LevelRecord>,
    generator: &GridGenerator,
    rng: &mut impl Rng,
) -> Result<Vec<GeneratedLevel>> {
    let mut regenerated = Vec::with_capacity(levels.len());

    for level in levels {
        let mut questions = Vec::with_capacity(level.questions.len());

        for question in level.questions {
            let answer = question.answer.trim().to_lowercase();
            if answer.is_empty() || answer.chars().count() > GRID_SIZE {
                tracing::debug!(
                    "Skipping question {} in level {}: answer does not fit a {}x{} grid",
                    question.q_id,
                    level.id,
                    GRID_SIZE,
                    GRID_SIZE
                );
                continue;
            }

            let placed = generator.generate(&answer, rng).with_context(|| {
                format!(
                    "generating grid for question {} in level {}",
                    question.q_id, level.id
                )
            })?;

            questions.push(GeneratedQuestion {
                q_id: question.q_id,
                coins: question.coins,
                grid: placed.grid,
                answer_placement: placed.placement,
                question: question.question,
                answer,
            });
        }

        if questions.is_empty() {
            tracing::debug!("Dropping level {}: no answer fits the grid", level.id);
            continue;
        }

        regenerated.push(GeneratedLevel {
            id: level.id,
            title: level.title,
            time_limit: level.time_limit,
            orientation: format!("{0}x{0}", GRID_SIZE),
            grid_size: GRID_SIZE * GRID_SIZE,
            questions,
        });
    }

    Ok(regenerated)
}
