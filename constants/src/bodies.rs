/// Static layout of a textured celestial body.
pub struct BodyInfo {
    pub name: &'static str,
    pub radius: f32,
    /// Longitude segments.
    pub sectors: u32,
    /// Latitude segments.
    pub stacks: u32,
    pub position: [f32; 3],
    pub colour_texture: &'static str,
    pub normal_texture: &'static str,
}

pub const MOON: BodyInfo = BodyInfo {
    name: "moon",
    radius: 3.0,
    sectors: 32,
    stacks: 32,
    position: [-10.0, 0.0, 30.0],
    colour_texture: "moon.jpg",
    normal_texture: "normal.jpg",
};

pub const MARS: BodyInfo = BodyInfo {
    name: "mars",
    radius: 3.0,
    sectors: 32,
    stacks: 32,
    position: [-20.0, 0.0, 47.0],
    colour_texture: "mars.jpeg",
    normal_texture: "normal2.jpeg",
};

pub const JUPITER: BodyInfo = BodyInfo {
    name: "jupiter",
    radius: 3.0,
    sectors: 32,
    stacks: 40,
    position: [-20.0, 0.0, 35.0],
    colour_texture: "jupiter.jpeg",
    normal_texture: "normal3.jpeg",
};
