pub mod cube {
    pub mod clock;
    pub mod config;
    pub mod cubie;
    pub mod grouping;
    pub mod lattice;
    pub mod puzzle;
    pub mod rig;
    pub mod rotation;
    pub mod selection;
}

pub mod utils {
    pub mod camera;
    pub mod constants;
    pub mod debug_functions;
    pub mod inputs;
    pub mod macros;
    pub mod objects;
    pub mod setup;
    pub mod systems_logic;
}

pub mod plugins {
    pub mod cube_plugin;
}
