/// Origin of a stop request. An inside call comes from a boarded rider
/// selecting a destination, an outside call from a rider on a landing.
/// Both land in the same floor queue; the elevator treats them alike.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Inside,
    Outside,
}

impl Call {
    pub fn as_string(self) -> String {
        match self {
            Call::Inside => String::from("inside"),
            Call::Outside => String::from("outside"),
        }
    }
}
