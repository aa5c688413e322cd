mod add_recipe;
mod all;
mod footer;
mod home;
mod log;
mod main;
mod recipe_detail;
mod settings;
mod tab_bar;

use self::log::log;
use super::*;
use add_recipe::add_recipe;
use footer::footer;
use home::home;
use main::main;
use recipe_detail::recipe_detail;
use settings::settings;
use tab_bar::tab_bar;

pub use all::all as render;
