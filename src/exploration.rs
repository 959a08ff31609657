use rand::Rng;

/// Exploration policy result
pub enum Choice {
    Explore,
    Exploit,
}

/// Epsilon greedy exploration policy with a fixed epsilon threshold
///
/// Draws from a caller-supplied generator so that the decision sequence is
/// reproducible from the generator's seed.
pub struct EpsilonGreedy {
    epsilon: f32,
}

impl EpsilonGreedy {
    /// Initialize epsilon greedy policy from an exploration probability
    pub fn new(epsilon: f32) -> Self {
        Self { epsilon }
    }

    /// Invoke epsilon greedy policy, consuming exactly one draw from `rng`
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Choice {
        if rng.gen::<f32>() < self.epsilon {
            Choice::Explore
        } else {
            Choice::Exploit
        }
    }
}
