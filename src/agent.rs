use log::{debug, trace};
use ndarray::{ArrayD, IxDyn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    error::SarsaError,
    exploration::{Choice, EpsilonGreedy},
};

/// Configuration for the [`SarsaAgent`]
#[derive(Debug, Clone)]
pub struct SarsaAgentConfig {
    /// The learning rate - must be strictly between 0 and 1
    pub alpha: f32,
    /// The discount factor - must be strictly between 0 and 1
    pub gamma: f32,
    /// Probability of choosing a uniformly random action over the greedy one
    pub epsilon: f32,
    /// Seed for the agent's random generator
    pub seed: u64,
}

impl Default for SarsaAgentConfig {
    fn default() -> Self {
        Self {
            alpha: 0.7,
            gamma: 0.99,
            epsilon: 0.1,
            seed: 42,
        }
    }
}

/// A tabular SARSA agent (on-policy TD control)
///
/// The agent owns a dense value table of shape `S1 × ... × Sk × A`, where the
/// leading dimensions index the discretized state space and the last dimension
/// indexes the action space. A caller-driven training loop feeds transitions
/// to [`update`](Self::update) in the classic SARSA sequence: observe state,
/// select action, act, observe reward and next state, select next action,
/// update.
///
/// All randomness comes from an owned generator seeded at construction, so
/// two agents with the same configuration produce identical action sequences
/// when presented with identical calls.
pub struct SarsaAgent {
    q_table: ArrayD<f32>,
    exploration: EpsilonGreedy,
    alpha: f32,
    gamma: f32,
    action_space: usize,
    rng: ChaCha8Rng,
}

impl SarsaAgent {
    /// Initialize a new `SarsaAgent` with a zeroed value table of the given shape
    ///
    /// ### Parameters
    /// - `shape` - Table dimensions; the last element is the action space size,
    ///   the preceding elements are the per-dimension sizes of the state space
    /// - `config` - Hyperparameters and rng seed
    ///
    /// Fails with [`SarsaError::InvalidHyperparameter`] if `alpha` or `gamma`
    /// is not in the open interval `(0,1)`, and with
    /// [`SarsaError::InvalidShape`] if `shape` is empty or has a zero-sized
    /// dimension.
    pub fn new(shape: &[usize], config: SarsaAgentConfig) -> Result<Self, SarsaError> {
        if !(config.alpha > 0.0 && config.alpha < 1.0) {
            return Err(SarsaError::InvalidHyperparameter {
                name: "alpha",
                value: config.alpha,
            });
        }
        if !(config.gamma > 0.0 && config.gamma < 1.0) {
            return Err(SarsaError::InvalidHyperparameter {
                name: "gamma",
                value: config.gamma,
            });
        }
        if shape.is_empty() || shape.contains(&0) {
            return Err(SarsaError::InvalidShape {
                shape: shape.to_vec(),
            });
        }

        debug!(
            "initializing SARSA agent with table shape {:?} and seed {}",
            shape, config.seed
        );

        Ok(Self {
            q_table: ArrayD::zeros(IxDyn(shape)),
            exploration: EpsilonGreedy::new(config.epsilon),
            alpha: config.alpha,
            gamma: config.gamma,
            action_space: shape[shape.len() - 1],
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        })
    }

    /// Choose an action for `state` with the epsilon greedy policy
    ///
    /// Consumes one uniform draw for the explore/exploit decision, and a
    /// second draw for the action index only when exploring.
    pub fn select_action(&mut self, state: &[usize]) -> Result<usize, SarsaError> {
        self.check_state(state)?;
        match self.exploration.choose(&mut self.rng) {
            Choice::Explore => Ok(self.rng.gen_range(0..self.action_space)),
            Choice::Exploit => self.get_best_action(state),
        }
    }

    /// Return the greedy action for `state`
    ///
    /// When multiple actions share the maximum value, the lowest action index
    /// wins. Consumes no randomness.
    pub fn get_best_action(&self, state: &[usize]) -> Result<usize, SarsaError> {
        self.check_state(state)?;
        let mut ix = state.to_vec();
        ix.push(0);

        let mut best_action = 0;
        let mut best_value = f32::NEG_INFINITY;
        for action in 0..self.action_space {
            ix[state.len()] = action;
            let value = self.q_table[ix.as_slice()];
            if value > best_value {
                best_value = value;
                best_action = action;
            }
        }

        Ok(best_action)
    }

    /// Learn from a single observed transition
    ///
    /// Applies the on-policy SARSA update, where the target uses the value of
    /// the actually selected `next_action` rather than a maximum over actions:
    ///
    /// Q(s,a) += α \* (r + γ \* Q(s',a') - Q(s,a))
    pub fn update(
        &mut self,
        state: &[usize],
        action: usize,
        reward: f32,
        next_state: &[usize],
        next_action: usize,
    ) -> Result<(), SarsaError> {
        let ix = self.index_of(state, action)?;
        let next_ix = self.index_of(next_state, next_action)?;

        let q_value = self.q_table[ix.as_slice()];
        let next_q_value = self.q_table[next_ix.as_slice()];
        let temporal_difference = reward + self.gamma * next_q_value - q_value;
        trace!("td error {} at {:?}", temporal_difference, ix);

        self.q_table[ix.as_slice()] += self.alpha * temporal_difference;
        Ok(())
    }

    pub fn get_q_table(&self) -> &ArrayD<f32> {
        &self.q_table
    }

    pub fn action_space(&self) -> usize {
        self.action_space
    }

    /// Validate `state` against the table's leading dimensions
    fn check_state(&self, state: &[usize]) -> Result<(), SarsaError> {
        let dims = &self.q_table.shape()[..self.q_table.ndim() - 1];
        if state.len() != dims.len() || state.iter().zip(dims).any(|(&s, &d)| s >= d) {
            return Err(SarsaError::StateOutOfBounds {
                state: state.to_vec(),
                dims: dims.to_vec(),
            });
        }
        Ok(())
    }

    /// Resolve a (state, action) pair to a full table index, checking bounds
    fn index_of(&self, state: &[usize], action: usize) -> Result<Vec<usize>, SarsaError> {
        self.check_state(state)?;
        if action >= self.action_space {
            return Err(SarsaError::ActionOutOfBounds {
                action,
                action_space: self.action_space,
            });
        }
        let mut ix = Vec::with_capacity(state.len() + 1);
        ix.extend_from_slice(state);
        ix.push(action);
        Ok(ix)
    }
}
