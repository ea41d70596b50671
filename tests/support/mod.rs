//! Shared fixtures for integration tests

#![allow(dead_code)]

use distro_base::DistroBase;

pub const CENTOS_7: &str = r#"NAME="CentOS Linux"
VERSION="7 (Core)"
ID="centos"
ID_LIKE="rhel fedora"
VERSION_ID="7"
PRETTY_NAME="CentOS Linux 7 (Core)"
ANSI_COLOR="0;31"
CPE_NAME="cpe:/o:centos:centos:7"
HOME_URL="https://www.centos.org/"
BUG_REPORT_URL="https://bugs.centos.org/"

CENTOS_MANTISBT_PROJECT="CentOS-7"
CENTOS_MANTISBT_PROJECT_VERSION="7"
REDHAT_SUPPORT_PRODUCT="centos"
REDHAT_SUPPORT_PRODUCT_VERSION="7"
"#;

pub const DEBIAN_10: &str = r#"PRETTY_NAME="Debian GNU/Linux 10 (buster)"
NAME="Debian GNU/Linux"
VERSION_ID="10"
VERSION="10 (buster)"
VERSION_CODENAME=buster
ID=debian
HOME_URL="https://www.debian.org/"
SUPPORT_URL="https://www.debian.org/support"
BUG_REPORT_URL="https://bugs.debian.org/"
"#;

pub const UBUNTU_24_04: &str = r#"PRETTY_NAME="Ubuntu 24.04.1 LTS"
NAME="Ubuntu"
VERSION_ID="24.04"
VERSION="24.04.1 LTS (Noble Numbat)"
VERSION_CODENAME=noble
ID=ubuntu
ID_LIKE=debian
UBUNTU_CODENAME=noble
"#;

pub const MINT_21: &str = r#"NAME="Linux Mint"
VERSION="21.3 (Virginia)"
ID=linuxmint
ID_LIKE="ubuntu debian"
PRETTY_NAME="Linux Mint 21.3"
VERSION_ID="21.3"
VERSION_CODENAME=virginia
UBUNTU_CODENAME=jammy
"#;

pub fn dapper() -> DistroBase {
    DistroBase::new("ubuntu", "6.06")
}

pub fn all_ubuntu() -> Vec<DistroBase> {
    ["6.06", "18.04", "20.04", "22.04", "24.04", "24.10"]
        .into_iter()
        .map(|series| DistroBase::new("ubuntu", series))
        .collect()
}

pub fn all_debian() -> Vec<DistroBase> {
    ["10", "12"]
        .into_iter()
        .map(|series| DistroBase::new("debian", series))
        .collect()
}

pub fn all_alma() -> Vec<DistroBase> {
    ["8.10", "9.4"]
        .into_iter()
        .map(|series| DistroBase::new("almalinux", series))
        .collect()
}

pub fn all_distros() -> Vec<DistroBase> {
    let mut all = all_ubuntu();
    all.extend(all_debian());
    all.extend(all_alma());
    all
}
