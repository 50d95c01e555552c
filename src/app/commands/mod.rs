pub mod set_roles;
