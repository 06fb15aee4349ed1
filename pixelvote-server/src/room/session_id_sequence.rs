use crate::room::session_id::SessionId;
use js_int::UInt;
use std::ops::RangeInclusive;

pub struct SessionIdSequence {
	id_pool: RangeInclusive<u64>,
}

impl Default for SessionIdSequence {
	fn default() -> Self {
		Self {
			id_pool: UInt::MIN.into()..=UInt::MAX.into(),
		}
	}
}

impl SessionIdSequence {
	pub fn next(&mut self) -> SessionId {
		SessionId::from(
			UInt::try_from(self.id_pool.next().expect("Ran out of available SessionIds."))
				.unwrap_or_else(|_| unreachable!()),
		)
	}
}
