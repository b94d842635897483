use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::evaluate::EvaluationFunction;

#[derive(Error, Debug, PartialEq)]
pub enum AgentParseError {
    #[error("Unknown agent: {name:?} (expected minimax, alpha-beta, expectimax or reflex)")]
    UnknownAgent { name: String },
}

/// How agent 0 picks its moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentKind {
    Minimax,
    AlphaBeta,
    Expectimax,
    Reflex,
}

impl FromStr for AgentKind {
    type Err = AgentParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "minimax" => Ok(AgentKind::Minimax),
            "alpha-beta" | "alphabeta" => Ok(AgentKind::AlphaBeta),
            "expectimax" => Ok(AgentKind::Expectimax),
            "reflex" => Ok(AgentKind::Reflex),
            _ => Err(AgentParseError::UnknownAgent {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            AgentKind::Minimax => "minimax",
            AgentKind::AlphaBeta => "alpha-beta",
            AgentKind::Expectimax => "expectimax",
            AgentKind::Reflex => "reflex",
        };
        write!(f, "{}", name)
    }
}

/// Configuration of the agent-0 player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentConfig {
    pub kind: AgentKind,
    /// Search depth in rounds. Ignored by the reflex agent.
    pub depth: u8,
    pub evaluation: EvaluationFunction,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            kind: AgentKind::AlphaBeta,
            depth: 2,
            evaluation: EvaluationFunction::Better,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_agent_kind() {
        assert_eq!(Ok(AgentKind::AlphaBeta), "alphabeta".parse());
        assert_eq!(Ok(AgentKind::Reflex), "reflex".parse());
        assert_eq!(
            Err(AgentParseError::UnknownAgent {
                name: "greedy".to_string()
            }),
            "greedy".parse::<AgentKind>()
        );
        assert_eq!("expectimax", AgentKind::Expectimax.to_string());
    }
}
