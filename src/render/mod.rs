pub mod blur;
pub mod composite;
pub mod cpu;
pub mod frame;
