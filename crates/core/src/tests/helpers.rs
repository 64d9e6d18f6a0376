// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use frota_rent_audit::{Actor, ActorKind, Cause};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("agent-123"), ActorKind::Agent)
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Agent request"))
}
