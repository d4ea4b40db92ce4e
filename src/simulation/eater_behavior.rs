//! Ant-eater hunting cycle: Hungry -> Eating -> (Hungry | Sleeping) -> Hungry.
//!
//! Capture is timer gated: prey has to stay on the eater's cell for a whole
//! countdown before it is swallowed, and may walk away in the meantime.

use crate::ant::Ant;
use crate::ant_eater::{AntEater, EaterState};
use crate::colony::Colony;
use crate::rng::RandomSource;
use crate::world::{Grid, Position};
use tracing::debug;

/// Ticks of co-location needed to swallow one ant
pub const EATING_TICKS: u32 = 10;
/// Ants eaten before the eater falls asleep
pub const SATIATION: u32 = 50;
/// Length of the post-meal sleep
pub const SLEEP_TICKS: u32 = 600;

fn any_ant_at(colonies: &[Colony], pos: Position) -> bool {
    colonies.iter().any(|c| c.has_ant_at(pos))
}

/// Advance one ant-eater by one tick; returns the ant it swallowed, if any
pub fn step_eater<R: RandomSource>(
    eater: &mut AntEater,
    colonies: &mut [Colony],
    grid: &Grid,
    rng: &mut R,
) -> Option<Ant> {
    match eater.state {
        EaterState::Hungry => {
            if any_ant_at(colonies, eater.position) {
                eater.state = EaterState::Eating;
                eater.countdown = EATING_TICKS;
                debug!(at = %eater.position, "ant-eater found prey");
            } else {
                let neighbors = grid.neighbors(eater.position);
                if let Some(target) = rng.pick(neighbors.as_slice()) {
                    eater.position = target;
                }
            }
            None
        }
        EaterState::Eating => {
            if eater.countdown == 0 {
                eater.state = EaterState::Hungry;
                return None;
            }
            eater.countdown -= 1;
            if eater.countdown > 0 {
                return None;
            }

            let pos = eater.position;
            let eaten = colonies.iter_mut().find_map(|c| c.remove_ant_at(pos));
            if let Some(ant) = &eaten {
                eater.ants_eaten += 1;
                eater.countdown = EATING_TICKS;
                debug!(ant = ant.id, at = %pos, total = eater.ants_eaten, "ant eaten");
            }

            if eater.ants_eaten >= SATIATION {
                eater.state = EaterState::Sleeping;
                eater.countdown = SLEEP_TICKS;
                debug!(at = %pos, "ant-eater asleep");
            } else if !any_ant_at(colonies, pos) {
                eater.state = EaterState::Hungry;
            }
            eaten
        }
        EaterState::Sleeping => {
            eater.countdown = eater.countdown.saturating_sub(1);
            if eater.countdown == 0 {
                eater.state = EaterState::Hungry;
                debug!(at = %eater.position, "ant-eater woke up");
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colony_with_ants_at(pos: Position, count: usize) -> Colony {
        let mut colony = Colony::new(pos, 5 * count as u32);
        for _ in 0..count {
            colony.try_spawn();
        }
        colony
    }

    #[test]
    fn test_hungry_eater_wanders() {
        let grid = Grid::new(3, 3);
        let mut eater = AntEater::new(Position::new(1, 1));
        let mut colonies: Vec<Colony> = Vec::new();
        let mut rng = fastrand::Rng::with_seed(9);

        for _ in 0..20 {
            let before = eater.position;
            step_eater(&mut eater, &mut colonies, &grid, &mut rng);
            assert_eq!(before.manhattan(eater.position), 1);
            assert_eq!(eater.state, EaterState::Hungry);
        }
    }

    #[test]
    fn test_capture_takes_ten_ticks() {
        let grid = Grid::new(4, 4);
        let spot = Position::new(1, 1);
        let mut eater = AntEater::new(spot);
        let mut colonies = vec![colony_with_ants_at(spot, 2)];
        let mut rng = fastrand::Rng::with_seed(1);

        assert!(step_eater(&mut eater, &mut colonies, &grid, &mut rng).is_none());
        assert_eq!(eater.state, EaterState::Eating);
        assert_eq!(eater.countdown, EATING_TICKS);

        for left in (1..EATING_TICKS).rev() {
            assert!(step_eater(&mut eater, &mut colonies, &grid, &mut rng).is_none());
            assert_eq!(eater.countdown, left);
        }

        let eaten = step_eater(&mut eater, &mut colonies, &grid, &mut rng);
        assert_eq!(eaten.map(|a| a.id), Some(0));
        assert_eq!(eater.ants_eaten, 1);
        assert_eq!(eater.countdown, EATING_TICKS);
        assert_eq!(eater.state, EaterState::Eating);
        assert_eq!(colonies[0].ants.len(), 1);
    }

    #[test]
    fn test_last_prey_eaten_returns_to_hunger() {
        let grid = Grid::new(4, 4);
        let spot = Position::new(2, 2);
        let mut eater = AntEater::new(spot);
        eater.state = EaterState::Eating;
        eater.countdown = 1;
        let mut colonies = vec![colony_with_ants_at(spot, 1)];
        let mut rng = fastrand::Rng::with_seed(1);

        assert!(step_eater(&mut eater, &mut colonies, &grid, &mut rng).is_some());
        assert_eq!(eater.state, EaterState::Hungry);
        assert!(colonies[0].ants.is_empty());
    }

    #[test]
    fn test_escaped_prey_aborts_meal() {
        let grid = Grid::new(4, 4);
        let spot = Position::new(2, 2);
        let mut eater = AntEater::new(spot);
        eater.state = EaterState::Eating;
        eater.countdown = 1;
        let mut colonies = vec![colony_with_ants_at(Position::new(0, 0), 1)];
        let mut rng = fastrand::Rng::with_seed(1);

        assert!(step_eater(&mut eater, &mut colonies, &grid, &mut rng).is_none());
        assert_eq!(eater.state, EaterState::Hungry);
        assert_eq!(eater.ants_eaten, 0);
        assert_eq!(colonies[0].ants.len(), 1);
    }

    #[test]
    fn test_searches_colonies_in_order() {
        let grid = Grid::new(4, 4);
        let spot = Position::new(1, 2);
        let mut eater = AntEater::new(spot);
        eater.state = EaterState::Eating;
        eater.countdown = 1;
        let mut colonies = vec![
            colony_with_ants_at(Position::new(3, 3), 1),
            colony_with_ants_at(spot, 1),
            colony_with_ants_at(spot, 1),
        ];
        let mut rng = fastrand::Rng::with_seed(1);

        step_eater(&mut eater, &mut colonies, &grid, &mut rng);

        assert_eq!(colonies[0].ants.len(), 1);
        assert!(colonies[1].ants.is_empty());
        assert_eq!(colonies[2].ants.len(), 1);
        assert_eq!(eater.state, EaterState::Eating);
    }

    #[test]
    fn test_fiftieth_ant_puts_eater_to_sleep() {
        let grid = Grid::new(4, 4);
        let spot = Position::new(1, 1);
        let mut eater = AntEater::new(spot);
        eater.state = EaterState::Eating;
        eater.countdown = 1;
        eater.ants_eaten = SATIATION - 1;
        let mut colonies = vec![colony_with_ants_at(spot, 3)];
        let mut rng = fastrand::Rng::with_seed(1);

        step_eater(&mut eater, &mut colonies, &grid, &mut rng);
        assert_eq!(eater.ants_eaten, SATIATION);
        assert_eq!(eater.state, EaterState::Sleeping);
        assert_eq!(eater.countdown, SLEEP_TICKS);

        for _ in 0..SLEEP_TICKS - 1 {
            step_eater(&mut eater, &mut colonies, &grid, &mut rng);
            assert_eq!(eater.state, EaterState::Sleeping);
            assert_eq!(eater.position, spot);
        }
        assert_eq!(colonies[0].ants.len(), 2);

        step_eater(&mut eater, &mut colonies, &grid, &mut rng);
        assert_eq!(eater.state, EaterState::Hungry);
        assert_eq!(eater.position, spot);
    }

    #[test]
    fn test_degenerate_states_recover() {
        let grid = Grid::new(4, 4);
        let mut colonies: Vec<Colony> = Vec::new();
        let mut rng = fastrand::Rng::with_seed(1);

        let mut eating = AntEater::new(Position::new(0, 0));
        eating.state = EaterState::Eating;
        step_eater(&mut eating, &mut colonies, &grid, &mut rng);
        assert_eq!(eating.state, EaterState::Hungry);
        assert_eq!(eating.position, Position::new(0, 0));

        let mut sleeping = AntEater::new(Position::new(0, 0));
        sleeping.state = EaterState::Sleeping;
        step_eater(&mut sleeping, &mut colonies, &grid, &mut rng);
        assert_eq!(sleeping.state, EaterState::Hungry);
    }
}
