use crate::db::clients::Client;

/// The authenticated client for one portal run.
///
/// Built from the matched `clients` row at login, passed explicitly to
/// every screen and dropped on logout. There is no token or password;
/// identity is just the matched phone/name/email triple.
#[derive(Debug, Clone)]
pub struct Session {
    pub phone: String,
    pub name: String,
    pub email: String,
}

impl From<&Client> for Session {
    fn from(client: &Client) -> Self {
        Session {
            phone: client.phone.clone(),
            name: client.name.clone(),
            email: client.email.clone(),
        }
    }
}
