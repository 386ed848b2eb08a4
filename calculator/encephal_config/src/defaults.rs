// Built-in clinical constants for the day-1 and day-3 encephalopathy models

pub const DAY1_INTERCEPT: f64 = -7.001;
pub const DAY1_ALCOHOL: f64 = 1.96;
pub const DAY1_BILIRUBIN: f64 = -0.024;
pub const DAY1_CREATININE: f64 = 0.009;
pub const DAY1_SOFA: f64 = 0.406;
pub const DAY1_THRESHOLD: f64 = 15.5;

pub const DAY3_INTERCEPT: f64 = -6.8;
pub const DAY3_ALCOHOL: f64 = 1.27;
pub const DAY3_CREATININE: f64 = -0.008;
pub const DAY3_UREA: f64 = 0.165;
pub const DAY3_SOFA: f64 = 0.43;
pub const DAY3_THRESHOLD: f64 = 20.5;

pub const UNKNOWN_LABEL: &str = "N/A";

pub const ADVISORY_DAY1_LOW: &str = concat!(
    "Интервенционная терапия:\n",
    "    - отказ от лапаротомных\n",
    "    хирургических вмешательств;\n",
    "    - проведение грудной\n",
    "    эпидуральной анальгезии.\n",
    "Консервативная терапия:\n",
    "    - энтеральная нутритивная\n",
    "    поддержка;\n",
    "    - стандартная терапия.",
);

pub const ADVISORY_DAY1_HIGH: &str = concat!(
    "Интервенционная терапия:\n",
    "    - отказ от всех хирургических методов\n",
    "    лечения (при отсутствии «жизненных»\n",
    "    показаний)\n",
    "    - проведение грудной эпидуральной\n",
    "    анальгезии.\n",
    "Консервативная терапия:\n",
    "    - энтеральная нутритивная поддержка;\n",
    "    - отказ от наркотических анальгетиков\n",
    "    и иммуномодуляторов.",
);

pub const ADVISORY_DAY3_LOW: &str = "Стандартная терапия";

pub const ADVISORY_DAY3_HIGH: &str = concat!(
    "Стандартная + седативная терапия\n",
    "Консультация невролога",
);
