use std::error::Error;

use sarsa::agent::{SarsaAgent, SarsaAgentConfig};

const WIDTH: usize = 10;
const HEIGHT: usize = 7;
const WIND: [usize; WIDTH] = [0, 0, 0, 1, 1, 1, 2, 2, 1, 0];
const START: [usize; 2] = [0, 3];
const GOAL: [usize; 2] = [7, 3];

const NUM_EPISODES: u32 = 500;
const MAX_STEPS: u32 = 10_000;

/// Windy gridworld with four moves and a constant upward crosswind per column
struct WindyGridworld {
    pos: [usize; 2],
}

impl WindyGridworld {
    fn new() -> Self {
        Self { pos: START }
    }

    fn reset(&mut self) -> [usize; 2] {
        self.pos = START;
        self.pos
    }

    fn step(&mut self, action: usize) -> (Option<[usize; 2]>, f32) {
        let [x, y] = self.pos;
        let y = y.saturating_sub(WIND[x]);

        let (x, y) = match action {
            0 => (x, y.saturating_sub(1)),             // up
            1 => ((x + 1).min(WIDTH - 1), y),          // right
            2 => (x, (y + 1).min(HEIGHT - 1)),         // down
            3 => (x.saturating_sub(1), y),             // left
            _ => unreachable!("action space has 4 actions"),
        };
        self.pos = [x, y.min(HEIGHT - 1)];

        if self.pos == GOAL {
            (None, 0.0)
        } else {
            (Some(self.pos), -1.0)
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut env = WindyGridworld::new();
    let mut agent = SarsaAgent::new(
        &[WIDTH, HEIGHT, 4],
        SarsaAgentConfig {
            alpha: 0.5,
            gamma: 0.99,
            epsilon: 0.1,
            seed: 42,
        },
    )?;

    for episode in 0..NUM_EPISODES {
        let mut state = env.reset();
        let mut action = agent.select_action(&state)?;
        let mut steps = 0;

        while steps < MAX_STEPS {
            steps += 1;
            let (next, reward) = env.step(action);
            let Some(next_state) = next else {
                break;
            };
            let next_action = agent.select_action(&next_state)?;
            agent.update(&state, action, reward, &next_state, next_action)?;
            state = next_state;
            action = next_action;
        }

        if (episode + 1) % 50 == 0 {
            println!("episode {:>3}: {} steps", episode + 1, steps);
        }
    }

    // walk the greedy policy from the start
    let mut pos = env.reset();
    let mut steps = 0;
    for _ in 0..MAX_STEPS {
        steps += 1;
        let (next, _) = env.step(agent.get_best_action(&pos)?);
        let Some(next_pos) = next else {
            break;
        };
        pos = next_pos;
    }
    println!("greedy policy reaches the goal in {steps} steps");

    Ok(())
}
