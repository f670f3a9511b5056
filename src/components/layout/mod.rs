mod auth_layout;

pub(crate) use auth_layout::AuthLayout;
