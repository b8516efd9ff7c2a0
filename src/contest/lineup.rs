//! Classic salary cap lineups.
//!
//! "Each player listed has an assigned salary and a valid lineup must not
//! exceed the salary cap of $50,000. Lineups will consist of 8 players and
//! must include players from at least 2 different NBA games."

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, trace};

use crate::{
    contest::player_pool::{ContestPlayer, ContestResultPlayer},
    error::LineupError,
    player::Player,
    rules::ContestRules,
    types::{ROSTER_SIZE, Slot},
};

/// Proposed occupants for each of the eight roster slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupSlots {
    /// PG.
    pub point_guard: ContestPlayer,
    /// SG.
    pub shooting_guard: ContestPlayer,
    /// SF.
    pub small_forward: ContestPlayer,
    /// PF.
    pub power_forward: ContestPlayer,
    /// C.
    pub center: ContestPlayer,
    /// G (PG, SG).
    pub guard: ContestPlayer,
    /// F (SF, PF).
    pub forward: ContestPlayer,
    /// Util (any position).
    pub utility: ContestPlayer,
}

impl LineupSlots {
    /// Occupant of `slot`.
    pub fn get(&self, slot: Slot) -> &ContestPlayer {
        match slot {
            Slot::PointGuard => &self.point_guard,
            Slot::ShootingGuard => &self.shooting_guard,
            Slot::SmallForward => &self.small_forward,
            Slot::PowerForward => &self.power_forward,
            Slot::Center => &self.center,
            Slot::Guard => &self.guard,
            Slot::Forward => &self.forward,
            Slot::Utility => &self.utility,
        }
    }

    /// Occupants in [`Slot::ALL`] order.
    pub fn occupants(&self) -> [&ContestPlayer; ROSTER_SIZE] {
        Slot::ALL.map(|slot| self.get(slot))
    }
}

/// A lineup that satisfies every contest rule.
///
/// The only way to obtain one is through validation, so holding a `Lineup`
/// is proof that it is legal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "LineupSlots")]
pub struct Lineup {
    slots: LineupSlots,
}

impl Serialize for Lineup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.slots.serialize(serializer)
    }
}

impl TryFrom<LineupSlots> for Lineup {
    type Error = LineupError;

    fn try_from(value: LineupSlots) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Lineup {
    /// Validates `slots` against the NBA Classic rules.
    pub fn new(slots: LineupSlots) -> Result<Self, LineupError> {
        Self::with_rules(slots, &ContestRules::default())
    }

    /// Validates `slots` against `rules`.
    ///
    /// Rules are checked in a fixed order and the first violation wins:
    /// duplicate players, game diversity, salary cap, then slot eligibility
    /// in [`Slot::ALL`] order.
    pub fn with_rules(slots: LineupSlots, rules: &ContestRules) -> Result<Self, LineupError> {
        if let Err(err) = validate(&slots, rules) {
            debug!(error = %err, "lineup rejected");
            return Err(err);
        }

        let lineup = Self { slots };
        trace!(total_salary = lineup.total_salary(), "lineup accepted");
        Ok(lineup)
    }

    /// Occupant of `slot`.
    pub fn slot(&self, slot: Slot) -> &ContestPlayer {
        self.slots.get(slot)
    }

    /// `(slot, occupant)` pairs in [`Slot::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &ContestPlayer)> + '_ {
        Slot::ALL.into_iter().map(|slot| (slot, self.slots.get(slot)))
    }

    /// Borrow the validated slot assignments.
    pub fn slots(&self) -> &LineupSlots {
        &self.slots
    }

    /// Give back the slot assignments.
    pub fn into_slots(self) -> LineupSlots {
        self.slots
    }

    /// PG occupant.
    pub fn point_guard(&self) -> &ContestPlayer {
        &self.slots.point_guard
    }

    /// SG occupant.
    pub fn shooting_guard(&self) -> &ContestPlayer {
        &self.slots.shooting_guard
    }

    /// SF occupant.
    pub fn small_forward(&self) -> &ContestPlayer {
        &self.slots.small_forward
    }

    /// PF occupant.
    pub fn power_forward(&self) -> &ContestPlayer {
        &self.slots.power_forward
    }

    /// C occupant.
    pub fn center(&self) -> &ContestPlayer {
        &self.slots.center
    }

    /// G occupant.
    pub fn guard(&self) -> &ContestPlayer {
        &self.slots.guard
    }

    /// F occupant.
    pub fn forward(&self) -> &ContestPlayer {
        &self.slots.forward
    }

    /// Util occupant.
    pub fn utility(&self) -> &ContestPlayer {
        &self.slots.utility
    }

    /// Sum of all eight salaries.
    pub fn total_salary(&self) -> u64 {
        total_salary(&self.slots)
    }

    /// Cap room left under `rules`.
    pub fn remaining_salary(&self, rules: &ContestRules) -> u64 {
        u64::from(rules.salary_cap()).saturating_sub(self.total_salary())
    }

    /// Distinct game ids on the roster.
    pub fn game_ids(&self) -> HashSet<&str> {
        self.slots.occupants().into_iter().map(ContestPlayer::game_id).collect()
    }

    /// Sums the points scored by this lineup's players.
    ///
    /// Results are matched by player identity; players without a result
    /// score zero.
    pub fn total_points(&self, results: &[ContestResultPlayer]) -> f64 {
        let points: HashMap<&Player, f64> = results
            .iter()
            .map(|r| (r.contest_player.player(), r.points))
            .collect();

        self.slots
            .occupants()
            .into_iter()
            .filter_map(|cp| points.get(cp.player()))
            .sum()
    }
}

fn total_salary(slots: &LineupSlots) -> u64 {
    slots
        .occupants()
        .into_iter()
        .map(|cp| u64::from(cp.salary()))
        .sum()
}

fn validate(slots: &LineupSlots, rules: &ContestRules) -> Result<(), LineupError> {
    let occupants = slots.occupants();

    let mut players = HashSet::with_capacity(ROSTER_SIZE);
    for cp in occupants {
        if !players.insert(cp.player()) {
            return Err(LineupError::DuplicatePlayer {
                id: cp.player().identity_key().to_string(),
            });
        }
    }

    let games: HashSet<&str> = occupants.iter().map(|cp| cp.game_id()).collect();
    if games.len() < rules.min_games() {
        return Err(LineupError::InsufficientGameDiversity {
            distinct: games.len(),
            required: rules.min_games(),
        });
    }

    let total = total_salary(slots);
    if total > u64::from(rules.salary_cap()) {
        return Err(LineupError::SalaryCapExceeded {
            total,
            cap: rules.salary_cap(),
        });
    }

    for slot in Slot::ALL {
        if !slots.get(slot).is_eligible_for(slot) {
            return Err(LineupError::InvalidSlotPosition { slot });
        }
    }

    Ok(())
}

/// Assembles a lineup one slot at a time.
///
/// Each [`LineupBuilder::set`] rejects an out-of-position player or a
/// salary overrun immediately; [`LineupBuilder::build`] then runs the full
/// lineup validation.
#[derive(Debug, Clone, Default)]
pub struct LineupBuilder {
    rules: ContestRules,
    slots: [Option<ContestPlayer>; ROSTER_SIZE],
}

impl LineupBuilder {
    /// Empty builder using the NBA Classic rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty builder using `rules`.
    pub fn with_rules(rules: ContestRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Places `player` in `slot`, returning the previous occupant.
    pub fn set(
        &mut self,
        slot: Slot,
        player: ContestPlayer,
    ) -> Result<Option<ContestPlayer>, LineupError> {
        if !player.is_eligible_for(slot) {
            return Err(LineupError::InvalidSlotPosition { slot });
        }

        let replaced = self.slots[slot.index()]
            .as_ref()
            .map_or(0, |cp| u64::from(cp.salary()));
        let total = self.salary() - replaced + u64::from(player.salary());
        if total > u64::from(self.rules.salary_cap()) {
            return Err(LineupError::SalaryCapExceeded {
                total,
                cap: self.rules.salary_cap(),
            });
        }

        Ok(self.slots[slot.index()].replace(player))
    }

    /// Occupant of `slot`, if any.
    pub fn get(&self, slot: Slot) -> Option<&ContestPlayer> {
        self.slots[slot.index()].as_ref()
    }

    /// Running salary of assigned slots.
    pub fn salary(&self) -> u64 {
        self.slots
            .iter()
            .flatten()
            .map(|cp| u64::from(cp.salary()))
            .sum()
    }

    /// Cap room left for unassigned slots.
    pub fn remaining_salary(&self) -> u64 {
        u64::from(self.rules.salary_cap()).saturating_sub(self.salary())
    }

    /// True when every slot is assigned.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Validates the assembled slots into a [`Lineup`].
    pub fn build(self) -> Result<Lineup, LineupError> {
        let [pg, sg, sf, pf, c, g, f, util] = self.slots;
        let missing = |slot: Slot| LineupError::MissingSlot { slot };

        let slots = LineupSlots {
            point_guard: pg.ok_or_else(|| missing(Slot::PointGuard))?,
            shooting_guard: sg.ok_or_else(|| missing(Slot::ShootingGuard))?,
            small_forward: sf.ok_or_else(|| missing(Slot::SmallForward))?,
            power_forward: pf.ok_or_else(|| missing(Slot::PowerForward))?,
            center: c.ok_or_else(|| missing(Slot::Center))?,
            guard: g.ok_or_else(|| missing(Slot::Guard))?,
            forward: f.ok_or_else(|| missing(Slot::Forward))?,
            utility: util.ok_or_else(|| missing(Slot::Utility))?,
        };

        Lineup::with_rules(slots, &self.rules)
    }
}
