mod goldens;

pub(crate) use goldens::{check_goldens, update_goldens};
