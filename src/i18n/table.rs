//! Localized strings, one row per [`Language`] in declaration order and one
//! column per [`TextKey`] in declaration order.

use super::{Language, TextKey};

pub(super) static TABLE: [[&str; TextKey::COUNT]; Language::COUNT] = [
    // English
    [
        "Gridit! 🐸",
        "Upload Image",
        "Customize it!",
        "Size",
        " rectangles.",
        "Color",
        "Thickness",
        "Opacity",
        "Original Image",
        "Gridded Image",
        "Download your Gridded Image!!!",
        "Nice! ",
        "Nice Counter: ",
        "No image yet! Click Upload Image to begin!",
        "Language:",
        "Start here",
        "Customize the grid so you can see it properly over your image",
        "🐸 🐸 🐸",
        "Hello there. This helps you create a rectilinear grid over an image of your choosing",
        "Your gridded image will appear here",
        "Upload an image to begin",
        "Status: Ready",
    ],
    // Spanish
    [
        "Gridit! 🐸",
        "Subir una Imagen",
        "Personalizá la grilla",
        "Tamaño",
        " rectángulos",
        "Color",
        "Grosor",
        "Opacidad",
        "Imagen Original",
        "Imagen con Grilla",
        "Descarga tu Imagen con Grilla!",
        "Buenísimo! ",
        "Contador de Buenísimo: ",
        "Hacé click en Subir Imagen para empezar!",
        "Idioma:",
        "Empezá acá",
        "Customizá la grilla para verla bien sobre tu imagen",
        "🐸 🐸 🐸",
        "Buenas. Agregale una grilla rectilinear a una imagen que elijas",
        "Tu imagen con grilla va a aparecer acá",
        "Subí una imagen para empezar",
        "Status: Listo",
    ],
    // Latin
    [
        "Gridit! 🐸",
        "Imago Submittere",
        "Personaliza!",
        "Magnitudinem",
        " rectangula.",
        "Color",
        "Crassitudo",
        "Opacitas",
        "Imago Originalis",
        "Imago cum Craticula",
        "Imago cum Craticula Discaricare!!!",
        "Bellus! ",
        "Bellus Numerator: ",
        "Nondum imago! Imago Submittere preme ut incipias!",
        "Lingua:",
        "Incipe hic",
        "Personaliza cratem ut videas eam recte super imaginem tuam",
        "🐸 🐸 🐸",
        "Salve. Hoc te adiuvat creare reticulum rectilineare super imaginem tuam electam",
        "Imago tua cum craticula hic apparebit",
        "Submitte imaginem ut incipias",
        "Status: Paratus",
    ],
    // Italian
    [
        "Gridit! 🐸",
        "Carica Immagine",
        "Personalizzalo!",
        "Dimensione",
        " rettangoli.",
        "Colore",
        "Spessore",
        "Opacità",
        "Immagine Originale",
        "Immagine con Griglia",
        "Scarica la tua Immagine con Griglia!",
        "Bello! ",
        "Contatore Bello: ",
        "Nessuna immagine ancora! Clicca su Carica Immagine per iniziare!",
        "Lingua:",
        "Inizia qui",
        "Personalizza la griglia in modo da vederla correttamente sulla tua immagine",
        "🐸 🐸 🐸",
        "Ciao. Questo ti aiuta a creare una griglia rettilinea su un'immagine di tua scelta",
        "La tua immagine con griglia apparirà qui",
        "Carica un'immagine per iniziare",
        "Status: Pronto",
    ],
    // Portuguese
    [
        "Gridit! 🐸",
        "Carregar Imagem",
        "Personalize!",
        "Tamanho",
        " retângulos.",
        "Cor",
        "Espessura: ",
        "Opacidade",
        "Imagem Original",
        "Imagem com Grade",
        "Baixe sua Imagem com Grade!",
        "Legal! ",
        "Contador Legal: ",
        "Nenhuma imagem ainda! Clique em Carregar Imagem para começar!",
        "Idioma:",
        "Comece aqui",
        "Personalize a grade para que você possa vê-la corretamente sobre sua imagem",
        "🐸 🐸 🐸",
        "Olá. Isto ajuda-te a criar uma grelha retilínea sobre uma imagem à tua escolha",
        "Sua imagem com grade aparecerá aqui",
        "Carregue uma imagem para começar",
        "Status: Pronto",
    ],
    // French
    [
        "Gridit! 🐸",
        "Télécharger une Image",
        "Personnalisez-le!",
        "Taille",
        " rectangles.",
        "Couleur",
        "Épaisseur",
        "Opacité",
        "Image Originale",
        "Image avec Grille",
        "Téléchargez votre Image avec Grille!",
        "Sympa! ",
        "Compteur Sympa: ",
        "Pas encore d'image! Cliquez sur Télécharger une Image pour commencer!",
        "Langue:",
        "Commencez ici",
        "Personnalisez la grille pour la voir correctement sur votre image",
        "🐸 🐸 🐸",
        "Bonjour. Ceci vous aide à créer une grille rectiligne sur une image de votre choix",
        "Votre image avec grille apparaîtra ici",
        "Téléchargez une image pour commencer",
        "Status: Prêt",
    ],
    // Asturiano
    [
        "Gridit! 🐸",
        "Xubir Imaxe",
        "¡Personalízalu!",
        "Tamañu",
        " rectángulos.",
        "Color",
        "Grosor",
        "Opacidá",
        "Imaxe Orixinal",
        "Imaxe con Cuadrícula",
        "¡Descarga la to Imaxe con Cuadrícula!",
        "¡Guapu! ",
        "Contador Guapu: ",
        "¡Entá nun hai imaxe! ¡Fai clic en Xubir Imaxe pa entamar!",
        "Llingua:",
        "Empieza equí",
        "Personaliza la cuadrícula pa vela correutamente sobro la to imaxen",
        "🐸 🐸 🐸",
        "Hola. Esto ayúdate a crear una cuadrícula retilínia sobro una imaxen de la to eleición",
        "La to imaxe con cuadrícula apaecerá equí",
        "Xube una imaxe pa entamar",
        "Status: Llistu",
    ],
    // Gaelic
    [
        "Gridit! 🐸",
        "Luchdaich Dealbh",
        "Gnàthaich e!",
        "Meud",
        " ceart-chearnagan.",
        "Dath",
        "Tiughad",
        "Dorchadas",
        "Dealbh Tùsail",
        "Dealbh le Griod",
        "Luchdaich sìos do Dhealbh le Griod!",
        "Sgoinneil! ",
        "Cunntair Sgoinneil: ",
        "Chan eil dealbh ann fhathast! Cliog air Luchdaich Dealbh gus tòiseachadh!",
        "Cànan:",
        "Tòisich an seo",
        "Gnàthaich an griod gus am faic thu e gu ceart thar do dhealbh",
        "🐸 🐸 🐸",
        "Halò. Bidh seo a' cuideachadh thu le bhith a' cruthachadh griod dìreach air ìomhaigh de do roghainn",
        "Nochdaidh do dhealbh le griod an seo",
        "Luchdaich dealbh gus tòiseachadh",
        "Status: Deiseil",
    ],
    // Euskara
    [
        "Gridit! 🐸",
        "Irudia Igo",
        "Pertsonalizatu!",
        "Tamaina",
        " laukizuzenak.",
        "Kolorea",
        "Lodiera",
        "Opakutasuna",
        "Jatorrizko Irudia",
        "Saretadun Irudia",
        "Zure Saretadun Irudia Deskargatu!",
        "Bikain! ",
        "Bikain Kontagailua: ",
        "Oraindik ez dago irudirik! Egin klik Irudia Igo botoian hasteko!",
        "Hizkuntza:",
        "Hasi hemen",
        "Pertsonalizatu sareta zure irudian behar bezala ikusteko",
        "🐸 🐸 🐸",
        "Kaixo. Honek hautatutako irudi baten gainean sareta zuzen bat sortzen laguntzen dizu",
        "Zure saretadun irudia hemen agertuko da",
        "Igo irudi bat hasteko",
        "Status: Prest",
    ],
    // Japanese
    [
        "Gridit! 🐸",
        "画像をアップロード",
        "カスタマイズしよう！",
        "サイズ",
        " 長方形",
        "色",
        "太さ",
        "不透明度",
        "元の画像",
        "グリッド付き画像",
        "グリッド付き画像をダウンロード！",
        "いいね！ ",
        "いいねカウンター: ",
        "まだ画像がありません！画像をアップロードをクリックして始めましょう！",
        "言語:",
        "ここから始める",
        "画像上で適切に表示できるようにグリッドをカスタマイズする",
        "🐸 🐸 🐸",
        "こんにちは。これはあなたが選んだ画像上に直線グリッドを作成するのに役立ちます",
        "グリッド付き画像がここに表示されます",
        "画像をアップロードして始めましょう",
        "ステータス: 準備完了",
    ],
    // Russian
    [
        "Gridit! 🐸",
        "Загрузить изображение",
        "Настроить!",
        "Размер",
        " прямоугольников",
        "Цвет",
        "Толщина",
        "Прозрачность",
        "Исходное изображение",
        "Изображение с сеткой",
        "Скачать изображение с сеткой!",
        "Отлично! ",
        "Счетчик отлично: ",
        "Изображения пока нет! Нажмите Загрузить изображение, чтобы начать!",
        "Язык:",
        "Начните здесь",
        "Настройте сетку, чтобы она хорошо отображалась на вашем изображении",
        "🐸 🐸 🐸",
        "Здравствуйте. Это поможет вам создать прямоугольную сетку поверх выбранного вами изображения",
        "Ваше изображение с сеткой появится здесь",
        "Загрузите изображение, чтобы начать",
        "Статус: Готово",
    ],
    // Tuvan
    [
        "Gridit! 🐸",
        "Чурукту киирер",
        "Таарыштырар!",
        "Хемчээл",
        " дөрбелчиннер",
        "Өң",
        "Кылын",
        "Көскүзү",
        "Баштайгы чурук",
        "Шыйыглыг чурук",
        "Шыйыглыг чурукту чүдүрүп алыр!",
        "Эки! ",
        "Эки саналга: ",
        "Чурук чок! Эгелээр дээш Чурукту киирер деп базыңар!",
        "Дыл:",
        "Мындан эгелеңер",
        "Шыйыгны чурукка эки көстүр кылдыр таарыштырыңар",
        "🐸 🐸 🐸",
        "Экии. Бо дээрге силерниң шилип алган чурууңарга дорт шыйыглар кылырынга дузалаар",
        "Силерниң шыйыглыг чурууңар мында көстүп кээр",
        "Эгелээр дээш чурукту киириңер",
        "Байдал: Белен",
    ],
    // Amharic
    [
        "Gridit! 🐸",
        "ምስል ይጫኑ",
        "ያስተካክሉት!",
        "መጠን",
        " አራት ማዕዘኖች",
        "ቀለም",
        "ውፍረት",
        "ግልጽነት",
        "ዋናው ምስል",
        "ፍርግርግ ያለው ምስል",
        "የፍርግርግ ምስልዎን ያውርዱ!!!",
        "ጥሩ! ",
        "ጥሩ ቆጣሪ: ",
        "እስካሁን ምንም ምስል የለም! ለመጀመር ምስል ይጫኑ ጠቅ ያድርጉ!",
        "ቋንቋ:",
        "እዚህ ይጀምሩ",
        "ፍርግርጉን በምስልዎ ላይ በትክክል እንዲታይ ያስተካክሉት",
        "🐸 🐸 🐸",
        "ሰላም። ይህ በእርስዎ ምርጫ ምስል ላይ አራት ማዕዘናዊ ፍርግርግ እንዲፈጥሩ ይረዳዎታል",
        "የፍርግርግ ምስልዎ እዚህ ይታያል",
        "ለመጀመር ምስል ይጫኑ",
        "ሁኔታ: ዝግጁ",
    ],
    // Hebrew
    [
        "Gridit! 🐸",
        "העלאת תמונה",
        "התאם אישית!",
        "גודל",
        " מלבנים",
        "צבע",
        "עובי",
        "שקיפות",
        "תמונה מקורית",
        "תמונה עם רשת",
        "הורד את התמונה עם הרשת!!!",
        "יפה! ",
        "מונה יפה: ",
        "אין תמונה עדיין! לחץ על העלאת תמונה כדי להתחיל!",
        "שפה:",
        "התחל כאן",
        "התאם את הרשת כדי שתוכל לראות אותה כראוי על התמונה שלך",
        "🐸 🐸 🐸",
        "שלום. זה עוזר לך ליצור רשת מלבנית על תמונה לבחירתך",
        "התמונה עם הרשת תופיע כאן",
        "העלה תמונה כדי להתחיל",
        "סטטוס: מוכן",
    ],
];
