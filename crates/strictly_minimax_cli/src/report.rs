//! One-shot `evaluate` and `best-move` reports.

use anyhow::Result;
use serde::Serialize;
use strictly_minimax::{Analysis, Board, Line, Utility, Verdict, evaluate, utility};
use tracing::instrument;

/// Evaluator output for a single board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Board in compact form.
    pub board: String,
    /// Whether the game is decided.
    pub terminal: bool,
    /// Payoff, present only for terminal boards.
    pub utility: Option<i8>,
    /// Status and winning line.
    pub verdict: Verdict,
}

/// Evaluates `board` for reporting.
#[instrument]
pub fn evaluation(board: &Board) -> Evaluation {
    let verdict = evaluate(board);
    Evaluation {
        board: board.to_string(),
        terminal: verdict.is_terminal(),
        utility: utility(board).ok().map(Utility::value),
        verdict,
    }
}

/// Renders an evaluation as text or JSON.
pub fn render_evaluation(evaluation: &Evaluation, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(evaluation)?);
    }
    let utility = evaluation
        .utility
        .map_or_else(|| "undefined".to_string(), |u| u.to_string());
    let line = evaluation
        .verdict
        .line
        .as_ref()
        .map_or_else(|| "none".to_string(), Line::to_string);
    Ok(format!(
        "board:    {}\nterminal: {}\nutility:  {}\nstatus:   {:?}\nline:     {}",
        evaluation.board, evaluation.terminal, utility, evaluation.verdict.status, line
    ))
}

/// Renders a search result as text or JSON.
pub fn render_analysis(board: &Board, analysis: &Analysis, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(analysis)?);
    }
    let mut out = format!(
        "{} to move on {}\nbest:  {}\nvalue: {}\nnodes: {}\n",
        analysis.to_move, board, analysis.best, analysis.value, analysis.nodes
    );
    for score in &analysis.scores {
        let marker = if score.position == analysis.best { '*' } else { ' ' };
        out.push_str(&format!(
            "{} {:<20} {}\n",
            marker,
            score.position.to_string(),
            score.value
        ));
    }
    Ok(out.trim_end().to_string())
}
