//! Account DTOs.

use serde::Deserialize;

use portal_core::account::{Account, AccountProfile, Address, Geo};

use super::{DecodeError, require_positive, require_text};

/// A directory entry as served by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountDto {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
}

impl TryFrom<AccountDto> for Account {
    type Error = DecodeError;

    fn try_from(dto: AccountDto) -> Result<Self, Self::Error> {
        Ok(Account {
            id: require_positive("id", dto.id)?,
            display_name: require_text("name", dto.name)?,
            login_handle: require_text("username", dto.username)?,
            email: require_text("email", dto.email)?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeoDto {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressDto {
    pub street: String,
    pub city: String,
    pub geo: GeoDto,
}

/// The extended record returned by `/users/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountProfileDto {
    #[serde(flatten)]
    pub account: AccountDto,
    pub phone: String,
    pub address: AddressDto,
}

impl TryFrom<AccountProfileDto> for AccountProfile {
    type Error = DecodeError;

    fn try_from(dto: AccountProfileDto) -> Result<Self, Self::Error> {
        let geo = dto.address.geo;
        if geo.lat.trim().parse::<f64>().is_err() {
            return Err(DecodeError::invalid("address.geo.lat", "must be numeric"));
        }
        if geo.lng.trim().parse::<f64>().is_err() {
            return Err(DecodeError::invalid("address.geo.lng", "must be numeric"));
        }

        Ok(AccountProfile {
            account: dto.account.try_into()?,
            phone: dto.phone,
            address: Address {
                street: dto.address.street,
                city: dto.address.city,
                geo: Geo {
                    lat: geo.lat,
                    lng: geo.lng,
                },
            },
        })
    }
}
