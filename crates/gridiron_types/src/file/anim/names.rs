//! Animation name resolution.
//!
//! Presentation code thinks in terms of player roles and actions; the asset
//! file thinks in terms of short names like `SKRUN`. This module is the
//! lookup table between the two. Pure data, no algorithm.

use std::fmt;

/// On-field role of the player a sprite depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerRole {
	/// Quarterback
	Quarterback,
	/// Running back
	RunningBack,
	/// Wide receiver
	Receiver,
	/// Offensive/defensive lineman
	Lineman,
	/// Kicker or punter
	Kicker,
	/// Generic skill player (used when the role makes no visual difference)
	SkillPlayer,
}

/// What the player is doing in the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
	/// Standing in formation
	Stand,
	/// Running without the ball
	Run,
	/// Running with the ball tucked
	RunWithBall,
	/// Throwing a bullet pass
	BulletPass,
	/// Catching a pass
	Catch,
	/// Kicking the ball
	Kick,
	/// End-zone spike celebration
	Spike,
}

impl fmt::Display for PlayerRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			PlayerRole::Quarterback => "quarterback",
			PlayerRole::RunningBack => "running back",
			PlayerRole::Receiver => "receiver",
			PlayerRole::Lineman => "lineman",
			PlayerRole::Kicker => "kicker",
			PlayerRole::SkillPlayer => "skill player",
		};
		f.write_str(label)
	}
}

impl fmt::Display for PlayerAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			PlayerAction::Stand => "stand",
			PlayerAction::Run => "run",
			PlayerAction::RunWithBall => "run with ball",
			PlayerAction::BulletPass => "bullet pass",
			PlayerAction::Catch => "catch",
			PlayerAction::Kick => "kick",
			PlayerAction::Spike => "spike",
		};
		f.write_str(label)
	}
}

/// Maps a role/action pair to its animation name in `ANIM.DAT`.
///
/// Returns `None` for combinations the asset file has no dedicated
/// animation for; callers fall back to a generic animation or stock art.
pub fn animation_name(role: PlayerRole, action: PlayerAction) -> Option<&'static str> {
	use PlayerAction::*;
	use PlayerRole::*;

	let name = match (role, action) {
		(Quarterback, BulletPass) => "QBBULIT",
		(Quarterback, Stand) => "QBSTAND",
		(RunningBack, RunWithBall) => "RBRNWB",
		(Receiver, Stand) => "RCSTAND",
		(Receiver, Catch) | (SkillPlayer, Catch) => "FCATCH",
		(Lineman, Stand) => "LMSTAND",
		(Kicker, Kick) => "KICK",
		(SkillPlayer, Run) => "SKRUN",
		(SkillPlayer, Spike) => "EZSPIKE",
		_ => return None,
	};
	Some(name)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_known_lookups() {
		assert_eq!(animation_name(PlayerRole::SkillPlayer, PlayerAction::Run), Some("SKRUN"));
		assert_eq!(
			animation_name(PlayerRole::Quarterback, PlayerAction::BulletPass),
			Some("QBBULIT")
		);
		assert_eq!(
			animation_name(PlayerRole::RunningBack, PlayerAction::RunWithBall),
			Some("RBRNWB")
		);
		assert_eq!(animation_name(PlayerRole::Kicker, PlayerAction::Kick), Some("KICK"));
	}

	#[test]
	fn test_unmapped_combination() {
		assert_eq!(animation_name(PlayerRole::Lineman, PlayerAction::Spike), None);
	}
}
