/*
 * data.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Word lists backing the generated values.

pub const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Amara", "Benedict", "Carmen", "Chloe", "Dmitri", "Elena", "Farah", "Grace",
    "Hiro", "Ingrid", "Jamal", "Kai", "Leila", "Marcus", "Nadia", "Omar", "Priya", "Quinn",
    "Rosa", "Samuel", "Tariq", "Uma", "Victor", "Wen", "Ximena", "Yusuf", "Zoe",
];

pub const LAST_NAMES: &[&str] = &[
    "Abbott", "Barros", "Chen", "Dubois", "Eriksen", "Fischer", "Garcia", "Hopper", "Ibrahim",
    "Johnson", "Kowalski", "Lovelace", "Moreau", "Nakamura", "Okafor", "Petrov", "Quispe",
    "Rossi", "Schmidt", "Turing", "Usman", "Vargas", "Walsh", "Xu", "Yamamoto", "Zimmerman",
];

pub const PREFIXES: &[&str] = &["Mr.", "Mrs.", "Ms.", "Miss", "Dr."];

pub const JOB_DESCRIPTORS: &[&str] = &[
    "Lead", "Senior", "Direct", "Corporate", "Dynamic", "Future", "Product", "National",
    "Regional", "Central", "Global", "Customer", "Investor", "Principal", "Internal",
];

pub const JOB_AREAS: &[&str] = &[
    "Solutions", "Program", "Brand", "Security", "Research", "Marketing", "Directives",
    "Implementation", "Integration", "Functionality", "Response", "Tactics", "Identity",
    "Markets", "Group", "Division", "Applications", "Optimization", "Operations", "Data",
];

pub const JOB_TYPES: &[&str] = &[
    "Supervisor", "Associate", "Executive", "Liaison", "Officer", "Manager", "Engineer",
    "Specialist", "Director", "Coordinator", "Administrator", "Architect", "Analyst",
    "Designer", "Planner", "Developer", "Consultant", "Agent", "Representative", "Strategist",
];

pub const FREE_EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "proton.me"];

pub const DOMAIN_SUFFIXES: &[&str] = &["com", "net", "org", "info", "biz", "io", "dev"];

pub const LOREM_WORDS: &[&str] = &[
    "a", "ab", "accusamus", "ad", "adipisci", "alias", "aliquam", "amet", "animi", "aperiam",
    "architecto", "aspernatur", "atque", "aut", "autem", "beatae", "blanditiis", "commodi",
    "consectetur", "consequatur", "corporis", "culpa", "cum", "cupiditate", "debitis",
    "delectus", "deleniti", "deserunt", "dicta", "dignissimos", "dolor", "dolore", "dolorem",
    "doloribus", "ducimus", "ea", "eaque", "eius", "eligendi", "enim", "eos", "error", "esse",
    "est", "et", "eum", "eveniet", "ex", "excepturi", "exercitationem", "expedita", "facere",
    "facilis", "fuga", "fugiat", "harum", "hic", "id", "illo", "impedit", "incidunt", "ipsa",
    "ipsam", "ipsum", "iste", "itaque", "iure", "labore", "laborum", "laudantium", "libero",
    "magnam", "magni", "maiores", "maxime", "minima", "minus", "modi", "molestiae", "mollitia",
    "nam", "natus", "necessitatibus", "nemo", "neque", "nesciunt", "nihil", "nisi", "nobis",
    "non", "nostrum", "nulla", "numquam", "obcaecati", "odio", "odit", "officia", "omnis",
    "optio", "pariatur", "perferendis", "placeat", "porro", "possimus", "praesentium",
    "provident", "quae", "quaerat", "quam", "quas", "quia", "quibusdam", "quidem", "quis",
    "quisquam", "quo", "quod", "ratione", "recusandae", "rem", "repellat", "repellendus",
    "reprehenderit", "rerum", "saepe", "sapiente", "sed", "sequi", "similique", "sint", "sit",
    "soluta", "sunt", "suscipit", "tempora", "tempore", "tenetur", "totam", "ullam", "unde",
    "ut", "vel", "velit", "veniam", "veritatis", "vero", "vitae", "voluptas", "voluptate",
];

pub const CITIES: &[&str] = &[
    "Springfield", "Riverside", "Fairview", "Franklin", "Greenville", "Bristol", "Clinton",
    "Georgetown", "Salem", "Madison", "Oakland", "Ashland", "Burlington", "Manchester",
    "Milton", "Newport", "Oxford", "Lakewood", "Kingston", "Dayton",
];

pub const COUNTRIES: &[&str] = &[
    "Argentina", "Australia", "Brazil", "Canada", "Chile", "Denmark", "Egypt", "Finland",
    "France", "Germany", "Ghana", "India", "Indonesia", "Italy", "Japan", "Kenya", "Mexico",
    "Netherlands", "Nigeria", "Norway", "Peru", "Portugal", "Spain", "Sweden", "Vietnam",
];

pub const STATES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "California", "Colorado", "Florida", "Georgia", "Illinois",
    "Iowa", "Kansas", "Maine", "Michigan", "Nevada", "New York", "Ohio", "Oregon", "Texas",
    "Utah", "Vermont", "Washington",
];

pub const STREET_NAMES: &[&str] = &[
    "Maple", "Oak", "Pine", "Cedar", "Elm", "Washington", "Lake", "Hill", "Park", "Main",
    "Church", "Mill", "River", "Sunset", "Highland",
];

pub const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Way", "Boulevard", "Place",
];

pub const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "and Sons", "Ltd"];

pub const CATCH_PHRASE_ADJECTIVES: &[&str] = &[
    "Adaptive", "Balanced", "Centralized", "Configurable", "Cross-platform", "Decentralized",
    "Distributed", "Enhanced", "Ergonomic", "Focused", "Innovative", "Integrated", "Managed",
    "Optional", "Proactive", "Reactive", "Robust", "Streamlined", "Synergized", "Versatile",
];

pub const CATCH_PHRASE_DESCRIPTORS: &[&str] = &[
    "24/7", "asynchronous", "bottom-line", "client-driven", "contextually-based", "dynamic",
    "empowering", "fault-tolerant", "global", "heuristic", "interactive", "mission-critical",
    "multi-tasking", "real-time", "scalable", "static", "transitional", "zero-defect",
];

pub const CATCH_PHRASE_NOUNS: &[&str] = &[
    "ability", "algorithm", "architecture", "benchmark", "capacity", "challenge", "database",
    "firmware", "framework", "hierarchy", "interface", "middleware", "model", "paradigm",
    "portal", "process improvement", "service-desk", "solution", "throughput", "workforce",
];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
    "Practical", "Sleek", "Awesome", "Generic", "Handcrafted", "Handmade", "Licensed",
    "Refined", "Unbranded", "Tasty",
];

pub const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
    "Fresh", "Frozen", "Bronze", "Silk",
];

pub const PRODUCTS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt",
    "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese", "Bacon",
    "Pizza", "Salad", "Sausages", "Chips",
];

pub const DEPARTMENTS: &[&str] = &[
    "Books", "Movies", "Music", "Games", "Electronics", "Computers", "Home", "Garden", "Tools",
    "Grocery", "Health", "Beauty", "Toys", "Kids", "Baby", "Clothing", "Shoes", "Jewelry",
    "Sports", "Outdoors", "Automotive", "Industrial",
];

pub const ALPHA: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMERIC: &[u8] = b"0123456789";
pub const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const MONTHS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

pub const WEEKDAYS: &[&str] = &[
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];
