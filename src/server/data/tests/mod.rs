mod linked;

use crosslink_test_utils::prelude::*;
use sea_orm::EntityTrait;
use serde_json::{json, Value};
