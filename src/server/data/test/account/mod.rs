mod api_key_in_use;
mod create;
mod find_by_login;
mod find_by_login_or_email;
mod find_detail;

use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::account::AccountRepository;
use crate::server::model::account::NewAccountParam;
