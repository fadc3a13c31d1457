pub mod view_args;
