//! Static audio/video/image extension table.
//!
//! Consulted only when the platform MIME database has no entry for a
//! filename. Keys are lowercase and include the leading dot.

pub(crate) const AV_MIME_TYPES: &[(&str, &str)] = &[
    (".aif", "audio/x-aiff"),
    (".aifc", "audio/x-aiff"),
    (".aiff", "audio/x-aiff"),
    (".au", "audio/basic"),
    (".ecelp4800", "audio/vnd.nuera.ecelp4800"),
    (".ecelp7470", "audio/vnd.nuera.ecelp7470"),
    (".ecelp9600", "audio/vnd.nuera.ecelp9600"),
    (".eol", "audio/vnd.digital-winds"),
    (".kar", "audio/midi"),
    (".lvp", "audio/vnd.lucent.voice"),
    (".m2a", "audio/mpeg"),
    (".m3a", "audio/mpeg"),
    (".m3u", "audio/x-mpegurl"),
    (".m4a", "audio/mp4a-latm"),
    (".m4p", "audio/mp4a-latm"),
    (".mid", "audio/midi"),
    (".midi", "audio/midi"),
    (".mp2", "audio/mpeg"),
    (".mp2a", "audio/mpeg"),
    (".mp3", "audio/mpeg"),
    (".mp4a", "audio/mp4"),
    (".mpga", "audio/mpeg"),
    (".ra", "audio/x-pn-realaudio"),
    (".ram", "audio/x-pn-realaudio"),
    (".rmi", "audio/midi"),
    (".rmp", "audio/x-pn-realaudio-plugin"),
    (".snd", "audio/basic"),
    (".wav", "audio/x-wav"),
    (".wax", "audio/x-ms-wax"),
    (".wma", "audio/x-ms-wma"),
    (".bmp", "image/bmp"),
    (".btif", "image/prs.btif"),
    (".cgm", "image/cgm"),
    (".cmx", "image/x-cmx"),
    (".djv", "image/vnd.djvu"),
    (".djvu", "image/vnd.djvu"),
    (".dwg", "image/vnd.dwg"),
    (".dxf", "image/vnd.dxf"),
    (".fbs", "image/vnd.fastbidsheet"),
    (".fpx", "image/vnd.fpx"),
    (".fst", "image/vnd.fst"),
    (".g3", "image/g3fax"),
    (".gif", "image/gif"),
    (".ico", "image/vnd.microsoft.icon"),
    (".ief", "image/ief"),
    (".jp2", "image/jp2"),
    (".jpe", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".jpg", "image/jpeg"),
    (".mac", "image/x-macpaint"),
    (".mdi", "image/vnd.ms-modi"),
    (".mmr", "image/vnd.fujixerox.edmics-mmr"),
    (".npx", "image/vnd.net-fpx"),
    (".pbm", "image/x-portable-bitmap"),
    (".pct", "image/x-pict"),
    (".pcx", "image/x-pcx"),
    (".pgm", "image/x-portable-graymap"),
    (".pic", "image/x-pict"),
    (".pict", "image/pict"),
    (".png", "image/png"),
    (".pnm", "image/x-portable-anymap"),
    (".pnt", "image/x-macpaint"),
    (".pntg", "image/x-macpaint"),
    (".ppm", "image/x-portable-pixmap"),
    (".psd", "image/vnd.adobe.photoshop"),
    (".qti", "image/x-quicktime"),
    (".qtif", "image/x-quicktime"),
    (".ras", "image/x-cmu-raster"),
    (".rgb", "image/x-rgb"),
    (".rlc", "image/vnd.fujixerox.edmics-rlc"),
    (".svg", "image/svg+xml"),
    (".svgz", "image/svg+xml"),
    (".tif", "image/tiff"),
    (".tiff", "image/tiff"),
    (".wbmp", "image/vnd.wap.wbmp"),
    (".xbm", "image/x-xbitmap"),
    (".xif", "image/vnd.xiff"),
    (".xpm", "image/x-xpixmap"),
    (".xwd", "image/x-xwindowdump"),
    (".3g2", "video/3gpp2"),
    (".3gp", "video/3gpp"),
    (".asf", "video/x-ms-asf"),
    (".asx", "video/x-ms-asf"),
    (".avi", "video/x-msvideo"),
    (".dif", "video/x-dv"),
    (".dv", "video/x-dv"),
    (".fli", "video/x-fli"),
    (".fvt", "video/vnd.fvt"),
    (".h261", "video/h261"),
    (".h263", "video/h263"),
    (".h264", "video/h264"),
    (".jpgm", "video/jpm"),
    (".jpgv", "video/jpeg"),
    (".jpm", "video/jpm"),
    (".m1v", "video/mpeg"),
    (".m2v", "video/mpeg"),
    (".m4u", "video/vnd.mpegurl"),
    (".m4v", "video/mp4"),
    (".mj2", "video/mj2"),
    (".mjp2", "video/mj2"),
    (".mov", "video/quicktime"),
    (".movie", "video/x-sgi-movie"),
    (".mp4", "video/mp4"),
    (".mp4v", "video/mp4"),
    (".mpa", "video/mpeg"),
    (".mpe", "video/mpeg"),
    (".mpeg", "video/mpeg"),
    (".mpg", "video/mpeg"),
    (".mpg4", "video/mp4"),
    (".mxu", "video/vnd.mpegurl"),
    (".qt", "video/quicktime"),
    (".viv", "video/vnd.vivo"),
    (".wm", "video/x-ms-wm"),
    (".wmv", "video/x-ms-wmv"),
    (".wmx", "video/x-ms-wmx"),
    (".wvx", "video/x-ms-wvx"),
];
