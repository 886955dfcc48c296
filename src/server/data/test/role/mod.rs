mod find_by_id;

use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::role::RoleRepository;
use crate::server::model::role::{ROLE_ADMIN, ROLE_BASIC, ROLE_OPERATOR};
