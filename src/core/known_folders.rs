//! Windows known folders, resolved through `SHGetKnownFolderPath`.
//!
//! `dirs` only covers a dozen of them. The shell keeps a `desktop.ini` in
//! most of the others too (Links, Favorites, Saved Games, the Public
//! folders, ...), so every filesystem-backed known folder is asked for.

use crate::error::SweepError;
use crate::log_debug;
use std::ffi::OsString;
use std::io;
use std::os::windows::ffi::OsStringExt;
use std::path::PathBuf;
use std::{ptr, slice};
use winapi::shared::winerror::{
    E_FAIL, E_INVALIDARG, ERROR_FILE_NOT_FOUND, ERROR_PATH_NOT_FOUND, HRESULT_FROM_WIN32, S_OK,
};
use winapi::um::combaseapi::CoTaskMemFree;
use winapi::um::knownfolders as kf;
use winapi::um::shlobj::SHGetKnownFolderPath;
use winapi::um::shtypes::KNOWNFOLDERID;
use winapi::um::winnt::PWSTR;

const KF_FLAG_DEFAULT: u32 = 0;

/// Every known folder that maps to a directory on disk.
fn known_folder_ids() -> Vec<(&'static str, KNOWNFOLDERID)> {
    vec![
        ("Profile", kf::FOLDERID_Profile),
        ("UserProfiles", kf::FOLDERID_UserProfiles),
        ("Public", kf::FOLDERID_Public),
        ("Desktop", kf::FOLDERID_Desktop),
        ("Documents", kf::FOLDERID_Documents),
        ("Downloads", kf::FOLDERID_Downloads),
        ("Pictures", kf::FOLDERID_Pictures),
        ("Music", kf::FOLDERID_Music),
        ("Videos", kf::FOLDERID_Videos),
        ("Favorites", kf::FOLDERID_Favorites),
        ("Links", kf::FOLDERID_Links),
        ("Contacts", kf::FOLDERID_Contacts),
        ("SavedGames", kf::FOLDERID_SavedGames),
        ("SavedSearches", kf::FOLDERID_SavedSearches),
        ("Objects3D", kf::FOLDERID_Objects3D),
        ("Templates", kf::FOLDERID_Templates),
        ("Recent", kf::FOLDERID_Recent),
        ("SendTo", kf::FOLDERID_SendTo),
        ("StartMenu", kf::FOLDERID_StartMenu),
        ("Programs", kf::FOLDERID_Programs),
        ("Startup", kf::FOLDERID_Startup),
        ("NetHood", kf::FOLDERID_NetHood),
        ("PrintHood", kf::FOLDERID_PrintHood),
        ("QuickLaunch", kf::FOLDERID_QuickLaunch),
        ("UserPinned", kf::FOLDERID_UserPinned),
        ("ImplicitAppShortcuts", kf::FOLDERID_ImplicitAppShortcuts),
        ("ApplicationShortcuts", kf::FOLDERID_ApplicationShortcuts),
        ("Libraries", kf::FOLDERID_Libraries),
        ("Playlists", kf::FOLDERID_Playlists),
        ("Ringtones", kf::FOLDERID_Ringtones),
        ("Screenshots", kf::FOLDERID_Screenshots),
        ("CameraRoll", kf::FOLDERID_CameraRoll),
        ("SavedPictures", kf::FOLDERID_SavedPictures),
        ("AppCaptures", kf::FOLDERID_AppCaptures),
        ("AccountPictures", kf::FOLDERID_AccountPictures),
        ("OriginalImages", kf::FOLDERID_OriginalImages),
        ("PhotoAlbums", kf::FOLDERID_PhotoAlbums),
        ("CDBurning", kf::FOLDERID_CDBurning),
        ("GameTasks", kf::FOLDERID_GameTasks),
        ("SearchHistory", kf::FOLDERID_SearchHistory),
        ("SearchTemplates", kf::FOLDERID_SearchTemplates),
        ("SkyDrive", kf::FOLDERID_SkyDrive),
        ("OneDrive", kf::FOLDERID_OneDrive),
        ("SkyDriveDocuments", kf::FOLDERID_SkyDriveDocuments),
        ("SkyDrivePictures", kf::FOLDERID_SkyDrivePictures),
        ("SkyDriveMusic", kf::FOLDERID_SkyDriveMusic),
        ("SkyDriveCameraRoll", kf::FOLDERID_SkyDriveCameraRoll),
        ("RoamingAppData", kf::FOLDERID_RoamingAppData),
        ("LocalAppData", kf::FOLDERID_LocalAppData),
        ("LocalAppDataLow", kf::FOLDERID_LocalAppDataLow),
        ("InternetCache", kf::FOLDERID_InternetCache),
        ("Cookies", kf::FOLDERID_Cookies),
        ("History", kf::FOLDERID_History),
        ("RoamingTiles", kf::FOLDERID_RoamingTiles),
        ("RoamedTileImages", kf::FOLDERID_RoamedTileImages),
        ("AdminTools", kf::FOLDERID_AdminTools),
        ("UserProgramFiles", kf::FOLDERID_UserProgramFiles),
        ("UserProgramFilesCommon", kf::FOLDERID_UserProgramFilesCommon),
        ("PublicDesktop", kf::FOLDERID_PublicDesktop),
        ("PublicDocuments", kf::FOLDERID_PublicDocuments),
        ("PublicDownloads", kf::FOLDERID_PublicDownloads),
        ("PublicPictures", kf::FOLDERID_PublicPictures),
        ("PublicMusic", kf::FOLDERID_PublicMusic),
        ("PublicVideos", kf::FOLDERID_PublicVideos),
        ("PublicRingtones", kf::FOLDERID_PublicRingtones),
        ("PublicLibraries", kf::FOLDERID_PublicLibraries),
        ("PublicUserTiles", kf::FOLDERID_PublicUserTiles),
        ("PublicGameTasks", kf::FOLDERID_PublicGameTasks),
        ("SampleMusic", kf::FOLDERID_SampleMusic),
        ("SamplePictures", kf::FOLDERID_SamplePictures),
        ("SamplePlaylists", kf::FOLDERID_SamplePlaylists),
        ("SampleVideos", kf::FOLDERID_SampleVideos),
        ("CommonStartMenu", kf::FOLDERID_CommonStartMenu),
        ("CommonPrograms", kf::FOLDERID_CommonPrograms),
        ("CommonStartup", kf::FOLDERID_CommonStartup),
        ("CommonTemplates", kf::FOLDERID_CommonTemplates),
        ("CommonAdminTools", kf::FOLDERID_CommonAdminTools),
        ("CommonOEMLinks", kf::FOLDERID_CommonOEMLinks),
        ("DeviceMetadataStore", kf::FOLDERID_DeviceMetadataStore),
        ("ProgramData", kf::FOLDERID_ProgramData),
        ("ProgramFiles", kf::FOLDERID_ProgramFiles),
        ("ProgramFilesCommon", kf::FOLDERID_ProgramFilesCommon),
        ("ProgramFilesX86", kf::FOLDERID_ProgramFilesX86),
        ("ProgramFilesCommonX86", kf::FOLDERID_ProgramFilesCommonX86),
        ("ProgramFilesX64", kf::FOLDERID_ProgramFilesX64),
        ("ProgramFilesCommonX64", kf::FOLDERID_ProgramFilesCommonX64),
        ("Windows", kf::FOLDERID_Windows),
        ("System", kf::FOLDERID_System),
        ("SystemX86", kf::FOLDERID_SystemX86),
        ("Fonts", kf::FOLDERID_Fonts),
        ("ResourceDir", kf::FOLDERID_ResourceDir),
        ("LocalizedResourcesDir", kf::FOLDERID_LocalizedResourcesDir),
    ]
}

/// HRESULTs that only say "this folder does not exist on this machine".
fn is_absent(hr: i32) -> bool {
    hr == E_FAIL
        || hr == E_INVALIDARG
        || hr == HRESULT_FROM_WIN32(ERROR_FILE_NOT_FOUND)
        || hr == HRESULT_FROM_WIN32(ERROR_PATH_NOT_FOUND)
}

fn known_folder_path(id: &KNOWNFOLDERID) -> Result<PathBuf, i32> {
    let mut raw: PWSTR = ptr::null_mut();
    unsafe {
        let hr = SHGetKnownFolderPath(id, KF_FLAG_DEFAULT, ptr::null_mut(), &mut raw);
        let path = if hr != S_OK {
            Err(hr)
        } else if raw.is_null() {
            Err(E_FAIL)
        } else {
            let mut len = 0;
            while *raw.add(len) != 0 {
                len += 1;
            }
            Ok(PathBuf::from(OsString::from_wide(slice::from_raw_parts(raw, len))))
        };
        // The caller owns the buffer whether or not the call succeeded.
        CoTaskMemFree(raw.cast());
        path
    }
}

/// Resolves every known folder present on this machine.
///
/// # Errors
/// `SweepError::Discovery` for any failure other than "folder not present".
pub fn resolve() -> Result<Vec<PathBuf>, SweepError> {
    let mut found = Vec::new();
    for (name, id) in known_folder_ids() {
        match known_folder_path(&id) {
            Ok(path) => found.push(path),
            Err(hr) if is_absent(hr) => log_debug!("Known folder {} is not present", name),
            Err(hr) => {
                return Err(SweepError::Discovery {
                    what: format!("known folder {}", name),
                    source: io::Error::other(format!("SHGetKnownFolderPath returned 0x{:08X}", hr as u32)),
                });
            }
        }
    }
    Ok(found)
}
