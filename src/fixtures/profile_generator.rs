use rand::Rng;

use crate::domain::types::{CarData, Driver, Profile};

const FIRST_NAMES: &[&str] = &[
    "Ali", "Mohammed", "Ahmed", "Omar", "Khaled", "Zayn", "Hassan", "Tariq", "Yusuf", "Karim",
    "Rami", "Samir", "Amir", "Fahad", "Walid", "Nasser", "Zaid", "Sami", "Faris", "Jamil", "Yara",
    "Rami", "Rayan", "Othman", "Rashid", "Fares", "Musa", "Sulaiman", "Zaher", "Hadi", "Tariq",
    "Rashid", "Bilal", "Hassan", "Mazen", "Imad", "Adnan", "Mujtaba", "Ayman", "Fawzi", "Bashir",
    "Amir", "Sami", "Ibrahim", "Mousa", "Tamer", "Riad", "Majed", "Ahmad", "Nabil", "Rami",
];

const LAST_NAMES: &[&str] = &[
    "Al-Mansoori", "Al-Hashimi", "Al-Qasimi", "Al-Nuaimi", "Al-Farsi", "Al-Majed", "Al-Dhaheri",
    "Al-Suwaidi", "Al-Kuwari", "Al-Obaidli", "Al-Rahmani", "Al-Basha", "Al-Saleh", "Al-Mutawa",
    "Al-Ghanem", "Al-Mazrouei", "Al-Jabari", "Al-Khalaf", "Al-Sabawi", "Al-Ansari", "Al-Shamsi",
    "Al-Kaabi", "Al-Hassan", "Al-Shahidi", "Al-Qudah", "Al-Muhairi", "Al-Maktoum", "Al-Ali",
    "Al-Siddiqi", "Al-Nasr", "Al-Khatib", "Al-Fahidi", "Al-Amiri", "Al-Saeedi", "Al-Suwaiyan",
    "Al-Rashid", "Al-Tamimi", "Al-Hashimi", "Al-Maghribi", "Al-Shawi", "Al-Fahad", "Al-Mubarak",
    "Al-Dawood", "Al-Ghazi", "Al-Qureishi", "Al-Mousa", "Al-Qatari", "Al-Turki", "Al-Sharif",
];

const CAR_BRANDS: [&str; 4] = ["Toyota", "Nissan", "Honda", "Lexus"];
const CAR_MODELS: [&str; 4] = ["Camry", "Altima", "Accord", "RX"];
const CAR_COLORS: [&str; 4] = ["White", "Black", "Silver", "Gray"];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, table: &[&'a str]) -> &'a str {
    table[rng.gen_range(0..table.len())]
}

fn generate_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

/// Driver with an age in [25, 60) and a `UAE-NNNNNNN` licence number.
fn generate_driver<R: Rng + ?Sized>(rng: &mut R) -> Driver {
    Driver {
        name: generate_name(rng),
        age: rng.gen_range(25..60),
        license_number: format!("UAE-{:07}", rng.gen_range(0..9_999_999u32)),
    }
}

/// Brand and model are drawn independently, so pairings like "Lexus Altima" happen.
fn generate_car_data<R: Rng + ?Sized>(rng: &mut R) -> CarData {
    let brand = pick(rng, &CAR_BRANDS).to_string();
    let model = pick(rng, &CAR_MODELS).to_string();
    let year = rng.gen_range(2015..2024);
    let color = pick(rng, &CAR_COLORS).to_string();
    let letter = char::from(b'A' + rng.gen_range(0..26u8));
    let plate_number = format!("{}{:05}", letter, rng.gen_range(0..99_999u32));

    CarData {
        brand,
        model,
        year,
        color,
        plate_number,
    }
}

pub fn generate_profile<R: Rng + ?Sized>(rng: &mut R) -> Profile {
    Profile {
        driver: generate_driver(rng),
        car_data: generate_car_data(rng),
    }
}
