//! Target architecture identifiers for prebuilt Windows binaries.

use std::fmt;

/// Architecture of the prebuilt binaries packed into the resources archive.
///
/// The order of [`Arch::ALL`] is the packaging order.
///
/// # Examples
///
/// ```
/// use curlthin_build::bundler::Arch;
///
/// assert_eq!(Arch::Win64.as_str(), "win64");
/// assert_eq!(Arch::from_dir_name("win32"), Some(Arch::Win32));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Arch {
    /// 32-bit x86 Windows
    Win32,
    /// 64-bit x86_64 Windows
    Win64,
}

impl Arch {
    /// Every architecture, in packaging order.
    pub const ALL: [Arch; 2] = [Arch::Win32, Arch::Win64];

    /// Identifier used in package names and as the output directory name.
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::Win32 => "win32",
            Arch::Win64 => "win64",
        }
    }

    /// Parses an output directory name back into an architecture.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|arch| arch.as_str() == name)
    }

    /// Architecture-specific file renames applied after the transfer library
    /// is copied, as `(from, to)` pairs.
    ///
    /// The 64-bit curl build ships `libcurl-x64.dll`; the binding loads
    /// `libcurl.dll` on both platforms.
    pub fn library_renames(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Arch::Win32 => &[],
            Arch::Win64 => &[("libcurl-x64.dll", "libcurl.dll")],
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packaging_order_is_win32_then_win64() {
        let names: Vec<_> = Arch::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(names, ["win32", "win64"]);
    }

    #[test]
    fn only_win64_renames_libcurl() {
        assert!(Arch::Win32.library_renames().is_empty());
        assert_eq!(
            Arch::Win64.library_renames(),
            &[("libcurl-x64.dll", "libcurl.dll")]
        );
    }

    #[test]
    fn unknown_dir_name_is_rejected() {
        assert_eq!(Arch::from_dir_name("arm64"), None);
        assert_eq!(Arch::from_dir_name("WIN64"), None);
    }
}
