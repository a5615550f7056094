// Catálogo estático de animais exibido na página de adoção

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub fn label(&self) -> &'static str {
        match self {
            Species::Dog => "Cão",
            Species::Cat => "Gato",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Species::Dog => "🐶",
            Species::Cat => "🐱",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub name: &'static str,
    pub species: Species,
    pub age: &'static str,
    pub description: &'static str,
}

pub static ANIMALS: [Animal; 6] = [
    Animal {
        name: "Thor",
        species: Species::Dog,
        age: "2 anos",
        description: "Brincalhão e muito carinhoso, se dá bem com crianças.",
    },
    Animal {
        name: "Luna",
        species: Species::Cat,
        age: "1 ano",
        description: "Calma e curiosa, adora um cantinho ao sol.",
    },
    Animal {
        name: "Pipoca",
        species: Species::Dog,
        age: "6 meses",
        description: "Filhote cheio de energia, já vacinado.",
    },
    Animal {
        name: "Mel",
        species: Species::Dog,
        age: "5 anos",
        description: "Tranquila, ideal para apartamento.",
    },
    Animal {
        name: "Frajola",
        species: Species::Cat,
        age: "3 anos",
        description: "Independente e companheiro, castrado.",
    },
    Animal {
        name: "Bento",
        species: Species::Cat,
        age: "8 meses",
        description: "Resgatado da rua, muito dócil.",
    },
];

pub fn count_by_species(species: Species) -> usize {
    ANIMALS.iter().filter(|a| a.species == species).count()
}
