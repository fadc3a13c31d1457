pub mod view_mapper;
