mod column;
pub(crate) use column::Column;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Field, FlagAttr};

mod join;
pub(crate) use join::{Join, JoinKind, LeftJoin};

mod lit;

mod manual;
pub(crate) use manual::Manual;

mod row;
pub(crate) use row::Row;

mod row_attr;
pub(crate) use row_attr::RowAttr;

mod select_level;
pub(crate) use select_level::SelectLevel;
